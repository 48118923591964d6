// State: a connection delegates each operation to its current state
// object, which may replace itself. The TCP names are flavor only; no
// sockets are involved.

use colored::Colorize;

/* ============================================================
 * Rendition 1: trait-object states that replace themselves
 * ============================================================
 */

trait TcpState {
    fn name(&self) -> &'static str;

    // Each handler consumes the boxed state and returns the next one.
    // Staying put is returning self.
    fn open(self: Box<Self>) -> Box<dyn TcpState>;
    fn close(self: Box<Self>) -> Box<dyn TcpState>;
    fn acknowledge(self: Box<Self>) -> Box<dyn TcpState>;
}

struct Listen;
struct Established;
struct CloseWait;
struct Closed;

impl TcpState for Listen {
    fn name(&self) -> &'static str {
        "LISTEN"
    }

    fn open(self: Box<Self>) -> Box<dyn TcpState> {
        // Send SYN, receive SYN/ACK.
        Box::new(Established)
    }

    fn close(self: Box<Self>) -> Box<dyn TcpState> {
        Box::new(Closed)
    }

    fn acknowledge(self: Box<Self>) -> Box<dyn TcpState> {
        self
    }
}

impl TcpState for Established {
    fn name(&self) -> &'static str {
        "ESTABLISHED"
    }

    fn open(self: Box<Self>) -> Box<dyn TcpState> {
        self
    }

    fn close(self: Box<Self>) -> Box<dyn TcpState> {
        // Send FIN, receive FIN/ACK.
        Box::new(CloseWait)
    }

    fn acknowledge(self: Box<Self>) -> Box<dyn TcpState> {
        // ACK the received segment, connection stays up.
        self
    }
}

impl TcpState for CloseWait {
    fn name(&self) -> &'static str {
        "CLOSE_WAIT"
    }

    fn open(self: Box<Self>) -> Box<dyn TcpState> {
        self
    }

    fn close(self: Box<Self>) -> Box<dyn TcpState> {
        // Send the last ACK.
        Box::new(Closed)
    }

    fn acknowledge(self: Box<Self>) -> Box<dyn TcpState> {
        self
    }
}

impl TcpState for Closed {
    fn name(&self) -> &'static str {
        "CLOSED"
    }

    fn open(self: Box<Self>) -> Box<dyn TcpState> {
        self
    }

    fn close(self: Box<Self>) -> Box<dyn TcpState> {
        self
    }

    fn acknowledge(self: Box<Self>) -> Box<dyn TcpState> {
        self
    }
}

struct TcpConnection {
    state: Option<Box<dyn TcpState>>,
}

impl TcpConnection {
    fn new() -> Self {
        Self {
            state: Some(Box::new(Listen)),
        }
    }

    fn state_name(&self) -> &'static str {
        self.state.as_ref().map(|s| s.name()).unwrap_or("CLOSED")
    }

    fn active_open(&mut self) {
        self.step("open", |s| s.open());
    }

    fn passive_open(&mut self) {
        self.step("open", |s| s.open());
    }

    fn close(&mut self) {
        self.step("close", |s| s.close());
    }

    fn send(&mut self) {
        self.step("send", |s| s.acknowledge());
    }

    fn step<F>(&mut self, op: &str, f: F)
    where
        F: FnOnce(Box<dyn TcpState>) -> Box<dyn TcpState>,
    {
        if let Some(state) = self.state.take() {
            let before = state.name();
            let after = f(state);
            if before == after.name() {
                println!("{op:>5}: {}", format!("{before} (no-op)").dimmed());
            } else {
                println!(
                    "{op:>5}: {} -> {}",
                    before.yellow(),
                    after.name().green()
                );
            }
            self.state = Some(after);
        }
    }
}

/* ============================================================
 * Rendition 2: the same machine as an enum
 * ============================================================
 */

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConnState {
    Listen,
    Established,
    CloseWait,
    Closed,
}

impl ConnState {
    fn on_open(self) -> Self {
        match self {
            ConnState::Listen => ConnState::Established,
            other => other,
        }
    }

    fn on_close(self) -> Self {
        match self {
            ConnState::Listen => ConnState::Closed,
            ConnState::Established => ConnState::CloseWait,
            ConnState::CloseWait => ConnState::Closed,
            ConnState::Closed => ConnState::Closed,
        }
    }

    fn on_acknowledge(self) -> Self {
        self
    }

    fn is_terminal(self) -> bool {
        self == ConnState::Closed
    }
}

fn main() {
    println!("=== Trait-object states ===");
    let mut conn = TcpConnection::new();
    conn.active_open(); // LISTEN -> ESTABLISHED
    conn.send(); // stays ESTABLISHED
    conn.close(); // -> CLOSE_WAIT
    conn.send(); // no-op
    conn.close(); // -> CLOSED
    conn.send(); // no-op, terminal
    println!("final state: {}", conn.state_name().bold());

    println!("\n=== Enum rendition, same table ===");
    let mut state = ConnState::Listen;
    for op in ["open", "send", "close", "send", "close", "send"] {
        let next = match op {
            "open" => state.on_open(),
            "close" => state.on_close(),
            _ => state.on_acknowledge(),
        };
        println!("{op:>5}: {state:?} -> {next:?}");
        state = next;
    }
    println!("terminal: {}", state.is_terminal());
}
