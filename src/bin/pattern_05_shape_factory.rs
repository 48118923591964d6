// Tagged shape creation: a free factory function maps a string tag to a
// boxed shape. An unrecognized tag is a handled miss, not a crash.

trait Shape {
    fn draw(&self) -> String;
}

struct Circle;

impl Shape for Circle {
    fn draw(&self) -> String {
        "drawing a circle".to_string()
    }
}

struct Square;

impl Shape for Square {
    fn draw(&self) -> String {
        "drawing a square".to_string()
    }
}

/// Tags are matched case-insensitively so "Circle" and "circle" name the
/// same shape.
fn create_shape(tag: &str) -> Option<Box<dyn Shape>> {
    if tag.eq_ignore_ascii_case("circle") {
        Some(Box::new(Circle))
    } else if tag.eq_ignore_ascii_case("square") {
        Some(Box::new(Square))
    } else {
        None
    }
}

fn known_tags() -> &'static [&'static str] {
    &["circle", "square"]
}

fn main() {
    println!("=== Creating shapes from tags ===");
    for tag in ["circle", "Square", "triangle"] {
        match create_shape(tag) {
            Some(shape) => println!("'{tag}' -> {}", shape.draw()),
            None => println!(
                "'{tag}' -> no such shape (known tags: {})",
                known_tags().join(", ")
            ),
        }
    }
}
