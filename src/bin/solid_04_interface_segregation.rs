// Interface segregation: one trait per role. A plain scanner never has to
// stub out printing or faxing it cannot do.

struct Document {
    name: String,
}

impl Document {
    fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

// A single fat `Machine` trait with print/scan/fax would force this
// scanner to implement printing it cannot perform. Role traits keep every
// implementer honest.

trait Print {
    fn print(&self, doc: &Document) -> String;
}

trait Scan {
    fn scan(&self, doc: &Document) -> String;
}

trait Fax {
    fn fax(&self, doc: &Document) -> String;
}

// =============================================================================
// Role-specific devices
// =============================================================================

struct InkjetPrinter;

impl Print for InkjetPrinter {
    fn print(&self, doc: &Document) -> String {
        format!("printing '{}'", doc.name)
    }
}

struct FlatbedScanner;

impl Scan for FlatbedScanner {
    fn scan(&self, doc: &Document) -> String {
        format!("scanning '{}'", doc.name)
    }
}

// =============================================================================
// Composing roles into a multi-function machine
// =============================================================================

/// The combined interface is just the sum of the narrow ones.
trait MultiFunction: Print + Scan {}

/// Delegates each role to an injected device.
struct OfficeMachine<P: Print, S: Scan> {
    printer: P,
    scanner: S,
}

impl<P: Print, S: Scan> OfficeMachine<P, S> {
    fn new(printer: P, scanner: S) -> Self {
        Self { printer, scanner }
    }
}

impl<P: Print, S: Scan> Print for OfficeMachine<P, S> {
    fn print(&self, doc: &Document) -> String {
        self.printer.print(doc)
    }
}

impl<P: Print, S: Scan> Scan for OfficeMachine<P, S> {
    fn scan(&self, doc: &Document) -> String {
        self.scanner.scan(doc)
    }
}

impl<P: Print, S: Scan> MultiFunction for OfficeMachine<P, S> {}

fn copy(machine: &dyn MultiFunction, doc: &Document) -> String {
    format!("{}; {}", machine.scan(doc), machine.print(doc))
}

fn main() {
    let report = Document::new("quarterly report");

    println!("=== Role-specific devices ===");
    let printer = InkjetPrinter;
    let scanner = FlatbedScanner;
    println!("{}", printer.print(&report));
    println!("{}", scanner.scan(&report));

    println!("\n=== Multi-function machine built from roles ===");
    let machine = OfficeMachine::new(InkjetPrinter, FlatbedScanner);
    println!("{}", machine.print(&report));
    println!("{}", machine.scan(&report));
    println!("copy: {}", copy(&machine, &report));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_printer_only_prints() {
        let doc = Document::new("d");
        assert_eq!(InkjetPrinter.print(&doc), "printing 'd'");
    }

    #[test]
    fn test_scanner_only_scans() {
        let doc = Document::new("d");
        assert_eq!(FlatbedScanner.scan(&doc), "scanning 'd'");
    }

    #[test]
    fn test_machine_delegates_each_role() {
        let doc = Document::new("d");
        let machine = OfficeMachine::new(InkjetPrinter, FlatbedScanner);
        assert_eq!(machine.print(&doc), InkjetPrinter.print(&doc));
        assert_eq!(machine.scan(&doc), FlatbedScanner.scan(&doc));
    }

    #[test]
    fn test_copy_uses_both_roles() {
        let doc = Document::new("memo");
        let machine = OfficeMachine::new(InkjetPrinter, FlatbedScanner);
        let result = copy(&machine, &doc);
        assert!(result.contains("scanning 'memo'"));
        assert!(result.contains("printing 'memo'"));
    }

    #[test]
    fn test_narrow_traits_accept_narrow_devices() {
        fn run_print(device: &dyn Print, doc: &Document) -> String {
            device.print(doc)
        }
        // A scanner simply cannot be passed here; only printers qualify.
        let doc = Document::new("d");
        assert!(run_print(&InkjetPrinter, &doc).starts_with("printing"));

        let machine = OfficeMachine::new(InkjetPrinter, FlatbedScanner);
        assert!(run_print(&machine, &doc).starts_with("printing"));
    }

    #[test]
    fn test_alternate_role_impls_swap_in() {
        struct LaserPrinter;
        impl Print for LaserPrinter {
            fn print(&self, doc: &Document) -> String {
                format!("laser-printing '{}'", doc.name)
            }
        }

        let doc = Document::new("d");
        let machine = OfficeMachine::new(LaserPrinter, FlatbedScanner);
        assert_eq!(machine.print(&doc), "laser-printing 'd'");
    }
}
