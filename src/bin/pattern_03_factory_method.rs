// Factory method: the creator decides which concrete product to build
// from an enumerated tag; callers only ever see the Product trait.

use std::str::FromStr;
use thiserror::Error;

trait Product: std::fmt::Debug {
    fn name(&self) -> &str;
    fn apply(&self) -> String;
}

#[derive(Debug)]
struct WidgetA;

impl Product for WidgetA {
    fn name(&self) -> &str {
        "widget-a"
    }

    fn apply(&self) -> String {
        "using product A".to_string()
    }
}

#[derive(Debug)]
struct WidgetB;

impl Product for WidgetB {
    fn name(&self) -> &str {
        "widget-b"
    }

    fn apply(&self) -> String {
        "using product B".to_string()
    }
}

// =============================================================================
// Enumerated tags and the creator seam
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ProductKind {
    A,
    B,
}

#[derive(Error, Debug, PartialEq)]
enum FactoryError {
    #[error("unknown product tag '{0}', expected one of: a, b")]
    UnknownTag(String),
}

impl FromStr for ProductKind {
    type Err = FactoryError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "a" | "widget-a" => Ok(ProductKind::A),
            "b" | "widget-b" => Ok(ProductKind::B),
            other => Err(FactoryError::UnknownTag(other.to_string())),
        }
    }
}

trait Creator {
    fn create(&self, kind: ProductKind) -> Box<dyn Product>;

    /// Convenience wrapper for callers holding a textual tag. The tag
    /// parse is the only fallible step.
    fn create_from_tag(&self, tag: &str) -> Result<Box<dyn Product>, FactoryError> {
        Ok(self.create(tag.parse()?))
    }
}

struct WidgetCreator;

impl Creator for WidgetCreator {
    fn create(&self, kind: ProductKind) -> Box<dyn Product> {
        match kind {
            ProductKind::A => Box::new(WidgetA),
            ProductKind::B => Box::new(WidgetB),
        }
    }
}

fn main() {
    let creator = WidgetCreator;

    println!("=== Creating by enum tag ===");
    let a = creator.create(ProductKind::A);
    let b = creator.create(ProductKind::B);
    println!("{}", a.apply());
    println!("{}", b.apply());

    println!("\n=== Creating by textual tag ===");
    for tag in ["a", "widget-b", "c"] {
        match creator.create_from_tag(tag) {
            Ok(product) => println!("'{tag}' -> {}", product.apply()),
            Err(err) => eprintln!("'{tag}' -> {err}"),
        }
    }
}
