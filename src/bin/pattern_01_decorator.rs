// Decorator: layer behavior around a component at call time instead of
// baking it into a subclass.

// =============================================================================
// Component interface and plain component
// =============================================================================

trait Component {
    fn operation(&self) -> String;
}

struct PlainComponent;

impl Component for PlainComponent {
    fn operation(&self) -> String {
        "plain component".to_string()
    }
}

// =============================================================================
// Decorators over boxed components
// =============================================================================

/// Prefixes a timestamp-style label before delegating to the wrapped
/// component. Wrapping order is visible in the output: the outermost
/// decorator's label comes first.
struct LabelDecorator {
    label: String,
    inner: Box<dyn Component>,
}

impl LabelDecorator {
    fn new(label: impl Into<String>, inner: Box<dyn Component>) -> Self {
        Self {
            label: label.into(),
            inner,
        }
    }
}

impl Component for LabelDecorator {
    fn operation(&self) -> String {
        format!("[{}] {}", self.label, self.inner.operation())
    }
}

struct UppercaseDecorator {
    inner: Box<dyn Component>,
}

impl Component for UppercaseDecorator {
    fn operation(&self) -> String {
        self.inner.operation().to_uppercase()
    }
}

// =============================================================================
// Generic wrapper: same pattern, static dispatch
// =============================================================================

/// Monomorphized alternative to the boxed decorators. No allocation, no
/// vtable, but the wrapped type is fixed at compile time.
struct Bracketed<C: Component> {
    inner: C,
}

impl<C: Component> Bracketed<C> {
    fn new(inner: C) -> Self {
        Self { inner }
    }
}

impl<C: Component> Component for Bracketed<C> {
    fn operation(&self) -> String {
        format!("<{}>", self.inner.operation())
    }
}

fn main() {
    println!("=== Plain component ===");
    let plain = PlainComponent;
    println!("{}", plain.operation());

    println!("\n=== Two decorators, dynamic dispatch ===");
    let decorated = LabelDecorator::new(
        "outer",
        Box::new(LabelDecorator::new("inner", Box::new(PlainComponent))),
    );
    println!("{}", decorated.operation());

    println!("\n=== Mixing decorator kinds ===");
    let shouting = UppercaseDecorator {
        inner: Box::new(LabelDecorator::new("audit", Box::new(PlainComponent))),
    };
    println!("{}", shouting.operation());

    println!("\n=== Generic wrapper, static dispatch ===");
    let bracketed = Bracketed::new(Bracketed::new(PlainComponent));
    println!("{}", bracketed.operation());
}
