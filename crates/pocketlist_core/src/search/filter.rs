//! Substring filtering for roster and catalog views.
//!
//! # Invariants
//! - Empty query matches every record.
//! - Names match case-insensitively; padded roll numbers match literally.
//! - Output keeps store order and is idempotent for the same query.

use crate::model::grocery::GroceryItem;
use crate::model::student::Student;

/// Returns whether `student` is visible for `query`.
pub fn student_matches(student: &Student, query: &str) -> bool {
    contains_ignore_case(&student.name, query) || student.roll_number.padded().contains(query)
}

/// Returns whether `item` is visible for `query`.
pub fn grocery_matches(item: &GroceryItem, query: &str) -> bool {
    contains_ignore_case(&item.name, query)
}

/// Filters `students` by `query`, preserving input order.
pub fn filter_students<'a, I>(students: I, query: &str) -> Vec<&'a Student>
where
    I: IntoIterator<Item = &'a Student>,
{
    students
        .into_iter()
        .filter(|student| student_matches(student, query))
        .collect()
}

/// Filters catalog `items` by `query`, preserving input order.
pub fn filter_groceries<'a, I>(items: I, query: &str) -> Vec<&'a GroceryItem>
where
    I: IntoIterator<Item = &'a GroceryItem>,
{
    items
        .into_iter()
        .filter(|item| grocery_matches(item, query))
        .collect()
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::{filter_groceries, filter_students, student_matches};
    use crate::model::grocery::GroceryItem;
    use crate::model::student::{RollNumber, Student};

    fn student(value: u32, name: &str) -> Student {
        Student::new(RollNumber::new(value).unwrap(), name).unwrap()
    }

    #[test]
    fn name_match_is_case_insensitive_substring() {
        let s = student(1, "Lakshay Saini");
        assert!(student_matches(&s, "SAINI"));
        assert!(student_matches(&s, "shay s"));
        assert!(!student_matches(&s, "singh"));
    }

    #[test]
    fn roll_number_match_uses_padded_text() {
        let s = student(2, "KamalPreet Singh");
        assert!(student_matches(&s, "02"));
        assert!(student_matches(&s, "2"));
        assert!(!student_matches(&student(12, "X"), "02"));
    }

    #[test]
    fn empty_query_keeps_everything_in_order() {
        let roster = vec![student(3, "C"), student(1, "A")];
        let view = filter_students(&roster, "");
        assert_eq!(view.len(), 2);
        assert_eq!(view[0].roll_number.get(), 3);
    }

    #[test]
    fn grocery_filter_ignores_ids() {
        let items = vec![
            GroceryItem::new("1", "Apples", 80.0).unwrap(),
            GroceryItem::new("2", "Bananas", 50.0).unwrap(),
        ];
        let view = filter_groceries(&items, "an");
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].name, "Bananas");
        assert!(filter_groceries(&items, "1").is_empty());
    }
}
