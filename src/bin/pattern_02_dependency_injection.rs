// Dependency injection: the car is handed its engine instead of building
// one, so the same car type runs against production engines or a test
// double.

use std::cell::Cell;

trait Engine {
    fn start(&self) -> String;
}

struct CombustionEngine;

impl Engine for CombustionEngine {
    fn start(&self) -> String {
        "starting the combustion engine".to_string()
    }
}

struct ElectricEngine;

impl Engine for ElectricEngine {
    fn start(&self) -> String {
        "starting the electric engine (silently)".to_string()
    }
}

/// Test double. Counts how often it was started so a test can assert the
/// car actually delegated.
struct RecordingEngine {
    starts: Cell<u32>,
}

impl RecordingEngine {
    fn new() -> Self {
        Self { starts: Cell::new(0) }
    }

    fn start_count(&self) -> u32 {
        self.starts.get()
    }
}

impl Engine for RecordingEngine {
    fn start(&self) -> String {
        self.starts.set(self.starts.get() + 1);
        format!("test engine start #{}", self.starts.get())
    }
}

// =============================================================================
// The consumer: receives its collaborator, never constructs it
// =============================================================================

struct Car {
    name: String,
    engine: Box<dyn Engine>,
}

impl Car {
    fn new(name: impl Into<String>, engine: Box<dyn Engine>) -> Self {
        Self {
            name: name.into(),
            engine,
        }
    }

    fn start(&self) -> String {
        format!("{}: {}", self.name, self.engine.start())
    }
}

fn main() {
    println!("=== Same car type, three engines ===");
    let sedan = Car::new("sedan", Box::new(CombustionEngine));
    let city_car = Car::new("city car", Box::new(ElectricEngine));
    println!("{}", sedan.start());
    println!("{}", city_car.start());

    println!("\n=== Injecting a test double ===");
    let test_car = Car::new("test rig", Box::new(RecordingEngine::new()));
    println!("{}", test_car.start());
    println!("{}", test_car.start());
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn test_car_delegates_to_injected_engine() {
        let car = Car::new("c", Box::new(CombustionEngine));
        assert_eq!(car.start(), "c: starting the combustion engine");
    }

    #[test]
    fn test_engines_are_swappable() {
        let combustion = Car::new("a", Box::new(CombustionEngine));
        let electric = Car::new("a", Box::new(ElectricEngine));
        assert_ne!(combustion.start(), electric.start());
    }

    #[test]
    fn test_recording_engine_counts_starts() {
        let engine = RecordingEngine::new();
        assert_eq!(engine.start_count(), 0);
        engine.start();
        engine.start();
        assert_eq!(engine.start_count(), 2);
    }

    #[test]
    fn test_injected_double_observes_delegation() {
        // Rc keeps a handle on the double after it moves into the car.
        struct SharedEngine(Rc<RecordingEngine>);
        impl Engine for SharedEngine {
            fn start(&self) -> String {
                self.0.start()
            }
        }

        let probe = Rc::new(RecordingEngine::new());
        let car = Car::new("rig", Box::new(SharedEngine(Rc::clone(&probe))));
        car.start();
        car.start();
        car.start();
        assert_eq!(probe.start_count(), 3);
    }
}
