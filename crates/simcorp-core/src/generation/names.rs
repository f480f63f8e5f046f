//! Name assignment for the workforce roster

/// Name for the worker spawned at `index`. The roster cycles through the
/// list once it runs out, matching the fixed population sizes.
pub fn staff_name(index: usize) -> &'static str {
    STAFF_NAMES[index % STAFF_NAMES.len()]
}

static STAFF_NAMES: &[&str] = &[
    "Alex", "Jordan", "Sam", "Riley", "Casey", "Morgan", "Taylor", "Reese", "Quinn", "Blake",
    "Avery", "Drew", "Jamie", "Skyler", "Kai", "Finn", "Lee", "Pat", "Chris", "Robin",
    "Dana", "Lou", "Val", "Kim", "Jan", "Dev", "Ash", "Ray", "Sol", "Noor",
    "Sage", "Reed", "Max", "Toni", "Erin", "Shay", "Rory", "Jude", "Wren", "Blair",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_cycle() {
        assert_eq!(staff_name(0), "Alex");
        assert_eq!(staff_name(39), "Blair");
        assert_eq!(staff_name(40), "Alex");
    }

    #[test]
    fn test_roster_variety() {
        let names: std::collections::HashSet<_> = (0..40).map(staff_name).collect();
        assert_eq!(names.len(), 40);
    }
}
