//! Utility functions

/// Avatar fallback letter for a name or email.
pub fn initial(name: &str) -> char {
    name.chars()
        .next()
        .map(|c| c.to_ascii_uppercase())
        .unwrap_or('?')
}

/// Part of an email address before the `@`, or the whole string if there is none.
pub fn email_local_part(email: &str) -> &str {
    email.split('@').next().unwrap_or(email)
}

/// `"1 collaborator"`, `"3 collaborators"`.
pub fn pluralize(count: usize, word: &str) -> String {
    if count == 1 {
        format!("{} {}", count, word)
    } else {
        format!("{} {}s", count, word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial() {
        assert_eq!(initial("alice"), 'A');
        assert_eq!(initial("Chen Wei"), 'C');
        assert_eq!(initial(""), '?');
    }

    #[test]
    fn test_email_local_part() {
        assert_eq!(email_local_part("sarah@email.com"), "sarah");
        assert_eq!(email_local_part("nobody"), "nobody");
    }

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize(1, "collaborator"), "1 collaborator");
        assert_eq!(pluralize(0, "minute"), "0 minutes");
        assert_eq!(pluralize(3, "collaborator"), "3 collaborators");
    }
}
