// Dependency inversion: the high-level research module depends on a
// browsing abstraction, not on how the low-level store keeps its tuples.

#[derive(Debug, Clone, PartialEq, Eq)]
struct Person {
    name: String,
}

impl Person {
    fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Relation {
    Parent,
    Child,
    Sibling,
}

// =============================================================================
// The abstraction both levels depend on
// =============================================================================

trait RelationshipBrowser {
    fn find_all_children_of(&self, name: &str) -> Vec<Person>;
}

// =============================================================================
// Low-level module: the concrete store
// =============================================================================

/// Keeps relationships as flat (from, relation, to) tuples. That layout is
/// a private detail; only the browser trait leaks out.
struct Relationships {
    relations: Vec<(Person, Relation, Person)>,
}

impl Relationships {
    fn new() -> Self {
        Self {
            relations: Vec::new(),
        }
    }

    fn add_parent_and_child(&mut self, parent: &Person, child: &Person) {
        self.relations
            .push((parent.clone(), Relation::Parent, child.clone()));
        self.relations
            .push((child.clone(), Relation::Child, parent.clone()));
    }

    fn add_siblings(&mut self, first: &Person, second: &Person) {
        self.relations
            .push((first.clone(), Relation::Sibling, second.clone()));
        self.relations
            .push((second.clone(), Relation::Sibling, first.clone()));
    }
}

impl RelationshipBrowser for Relationships {
    fn find_all_children_of(&self, name: &str) -> Vec<Person> {
        self.relations
            .iter()
            .filter(|(from, relation, _)| from.name == name && *relation == Relation::Parent)
            .map(|(_, _, to)| to.clone())
            .collect()
    }
}

// =============================================================================
// High-level module: sees only the trait
// =============================================================================

struct Research<'a> {
    browser: &'a dyn RelationshipBrowser,
}

impl<'a> Research<'a> {
    fn new(browser: &'a dyn RelationshipBrowser) -> Self {
        Self { browser }
    }

    fn children_report(&self, parent_name: &str) -> Vec<String> {
        self.browser
            .find_all_children_of(parent_name)
            .into_iter()
            .map(|child| format!("{parent_name} has a child called {}", child.name))
            .collect()
    }
}

fn main() {
    let john = Person::new("John");
    let chris = Person::new("Chris");
    let matt = Person::new("Matt");

    let mut relationships = Relationships::new();
    relationships.add_parent_and_child(&john, &chris);
    relationships.add_parent_and_child(&john, &matt);
    relationships.add_siblings(&chris, &matt);

    println!("=== Research through the abstraction ===");
    let research = Research::new(&relationships);
    for line in research.children_report("John") {
        println!("{line}");
    }

    println!("\n=== Nobody by that name ===");
    let report = research.children_report("Alice");
    println!("{} results for Alice", report.len());
}
