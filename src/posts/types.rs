use serde::Deserialize;

/// A single post as returned by the API.
///
/// Posts are immutable once fetched; the whole set is replaced on refresh,
/// never patched in place.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub body: String,
}

impl Post {
    /// Title with each word capitalized, as shown on cards and in the detail
    /// view. The API serves titles in all-lowercase.
    pub fn display_title(&self) -> String {
        title_case(&self.title)
    }
}

fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_case_capitalizes_each_word() {
        assert_eq!(title_case("sunt aut facere"), "Sunt Aut Facere");
    }

    #[test]
    fn title_case_handles_empty_and_non_ascii() {
        assert_eq!(title_case(""), "");
        assert_eq!(title_case("état d'urgence"), "État D'urgence");
    }

    #[test]
    fn display_title_collapses_repeated_whitespace() {
        let post = Post {
            id: 1,
            title: "two  words".to_string(),
            body: String::new(),
        };
        assert_eq!(post.display_title(), "Two Words");
    }
}
