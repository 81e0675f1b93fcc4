pub fn wrap_prev_index(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else if current == 0 {
        len - 1
    } else {
        current - 1
    }
}

pub fn wrap_next_index(current: usize, len: usize) -> usize {
    if len == 0 || current + 1 >= len {
        0
    } else {
        current + 1
    }
}

/// Keeps the end of an input that no longer fits, so the cursor stays in view.
pub fn visible_tail(value: &str, max_chars: usize) -> String {
    let count = value.chars().count();
    if count <= max_chars {
        return value.to_string();
    }

    if max_chars <= 1 {
        return value.chars().skip(count - max_chars).collect();
    }

    let tail: String = value.chars().skip(count - (max_chars - 1)).collect();
    format!("…{}", tail)
}

#[cfg(test)]
mod tests {
    use super::{visible_tail, wrap_next_index, wrap_prev_index};

    #[test]
    fn test_wrap_prev_index_wraps_to_end() {
        assert_eq!(wrap_prev_index(0, 6), 5);
        assert_eq!(wrap_prev_index(3, 6), 2);
        assert_eq!(wrap_prev_index(0, 0), 0);
    }

    #[test]
    fn test_wrap_next_index_wraps_to_start() {
        assert_eq!(wrap_next_index(5, 6), 0);
        assert_eq!(wrap_next_index(1, 6), 2);
        assert_eq!(wrap_next_index(0, 0), 0);
    }

    #[test]
    fn test_visible_tail() {
        assert_eq!(visible_tail("Milho", 10), "Milho");
        assert_eq!(visible_tail("Feijão carioca", 6), "…rioca");
        assert_eq!(visible_tail("abc", 1), "c");
    }
}
