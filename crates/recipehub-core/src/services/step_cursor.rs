//! Current-step pointer for the viewer

/// Zero-based pointer clamped to `[0, len - 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepCursor {
    current: usize,
    len: usize,
}

impl StepCursor {
    pub fn new(len: usize) -> Self {
        Self { current: 0, len }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn can_go_previous(&self) -> bool {
        self.current > 0
    }

    pub fn can_go_next(&self) -> bool {
        self.current + 1 < self.len
    }

    pub fn previous(&mut self) -> bool {
        if self.can_go_previous() {
            self.current -= 1;
            true
        } else {
            false
        }
    }

    pub fn next(&mut self) -> bool {
        if self.can_go_next() {
            self.current += 1;
            true
        } else {
            false
        }
    }

    /// `(current + 1) / len`, or 0 with no steps.
    pub fn progress(&self) -> f64 {
        if self.len == 0 {
            0.0
        } else {
            (self.current + 1) as f64 / self.len as f64
        }
    }

    pub fn percent(&self) -> u32 {
        (self.progress() * 100.0).round() as u32
    }

    pub fn label(&self) -> String {
        if self.len == 0 {
            "No steps".to_string()
        } else {
            format!("Step {} of {}", self.current + 1, self.len)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries_are_noops() {
        let mut cursor = StepCursor::new(5);
        assert!(!cursor.previous());
        assert_eq!(cursor.current(), 0);

        for _ in 0..10 {
            cursor.next();
        }
        assert_eq!(cursor.current(), 4);
        assert!(!cursor.can_go_next());
        assert!(!cursor.next());
        assert_eq!(cursor.current(), 4);
    }

    #[test]
    fn test_progress_label() {
        let mut cursor = StepCursor::new(5);
        cursor.next();
        cursor.next();
        assert_eq!(cursor.label(), "Step 3 of 5");
        assert_eq!(cursor.percent(), 60);
        assert!((cursor.progress() - 0.6).abs() < f64::EPSILON);
    }

    #[test]
    fn test_no_steps() {
        let mut cursor = StepCursor::new(0);
        assert!(!cursor.next());
        assert!(!cursor.previous());
        assert_eq!(cursor.progress(), 0.0);
        assert_eq!(cursor.label(), "No steps");
    }
}
