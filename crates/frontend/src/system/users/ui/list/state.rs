use contracts::system::users::User;
use std::cmp::Ordering;

use crate::shared::list_utils::{any_field_contains, filter_list, Searchable};

impl Searchable for User {
    fn matches_filter(&self, needle: &str) -> bool {
        any_field_contains(
            [Some(self.name.as_str()), Some(self.email.as_str()), Some(self.role.as_str())],
            needle,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Name,
    Email,
    Role,
    Created,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UsersListState {
    pub search_query: String,
    pub sort_field: SortField,
    pub sort_ascending: bool,
}

impl Default for UsersListState {
    fn default() -> Self {
        Self {
            search_query: String::new(),
            sort_field: SortField::Name,
            sort_ascending: true,
        }
    }
}

impl UsersListState {
    /// Clicking the active column flips direction; another column starts
    /// ascending.
    pub fn toggle_sort(&mut self, field: SortField) {
        if self.sort_field == field {
            self.sort_ascending = !self.sort_ascending;
        } else {
            self.sort_field = field;
            self.sort_ascending = true;
        }
    }

    pub fn indicator(&self, field: SortField) -> &'static str {
        match (self.sort_field == field, self.sort_ascending) {
            (false, _) => "",
            (true, true) => " ▲",
            (true, false) => " ▼",
        }
    }

    pub fn apply(&self, users: &[User]) -> Vec<User> {
        let mut rows = filter_list(users, &self.search_query);
        rows.sort_by(|a, b| {
            let ord = compare(a, b, self.sort_field);
            if self.sort_ascending {
                ord
            } else {
                ord.reverse()
            }
        });
        rows
    }
}

fn compare(a: &User, b: &User, field: SortField) -> Ordering {
    match field {
        SortField::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        SortField::Email => a.email.to_lowercase().cmp(&b.email.to_lowercase()),
        SortField::Role => a.role.cmp(&b.role),
        SortField::Created => a.created_at.cmp(&b.created_at),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: &str, email: &str, role: &str) -> User {
        User {
            id: email.into(),
            name: name.into(),
            email: email.into(),
            role: role.into(),
            status: None,
            created_at: None,
        }
    }

    fn names(rows: &[User]) -> Vec<&str> {
        rows.iter().map(|u| u.name.as_str()).collect()
    }

    #[test]
    fn sorts_by_name_and_flips_direction() {
        let users = vec![
            user("carol", "c@x.io", "admin"),
            user("Alice", "a@x.io", "sales"),
            user("bob", "b@x.io", "purchase"),
        ];
        let mut state = UsersListState::default();
        assert_eq!(names(&state.apply(&users)), ["Alice", "bob", "carol"]);

        state.toggle_sort(SortField::Name);
        assert_eq!(names(&state.apply(&users)), ["carol", "bob", "Alice"]);
        assert_eq!(state.indicator(SortField::Name), " ▼");

        state.toggle_sort(SortField::Role);
        assert!(state.sort_ascending);
        assert_eq!(names(&state.apply(&users)), ["carol", "bob", "Alice"]);
        assert_eq!(state.indicator(SortField::Name), "");
    }

    #[test]
    fn search_matches_name_email_or_role() {
        let users = vec![user("Alice", "a@x.io", "sales"), user("Bob", "bob@y.io", "purchase")];
        let state = UsersListState {
            search_query: "PURCH".into(),
            ..Default::default()
        };
        assert_eq!(names(&state.apply(&users)), ["Bob"]);
    }
}
