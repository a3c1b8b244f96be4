//! Array-field management for list sections (experiences, education, skills,
//! languages, achievements).
//!
//! A list draft always holds at least one row. Row 0 is protected from
//! removal unless the policy says otherwise.

use crate::forms::FormError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowPolicy {
    pub protect_first_row: bool,
}

impl Default for RowPolicy {
    fn default() -> Self {
        Self {
            protect_first_row: true,
        }
    }
}

impl RowPolicy {
    pub fn allow_first_row_removal() -> Self {
        Self {
            protect_first_row: false,
        }
    }
}

/// Pushes a blank row and returns its index.
pub fn append_row<T: Default>(rows: &mut Vec<T>) -> usize {
    rows.push(T::default());
    rows.len() - 1
}

pub fn remove_row<T>(
    rows: &mut Vec<T>,
    list: &str,
    index: usize,
    policy: RowPolicy,
) -> Result<T, FormError> {
    if index >= rows.len() {
        return Err(FormError::RowOutOfRange {
            list: list.to_string(),
            index,
        });
    }
    if index == 0 && policy.protect_first_row {
        return Err(FormError::ProtectedRow {
            list: list.to_string(),
        });
    }
    if rows.len() <= 1 {
        return Err(FormError::LastRow {
            list: list.to_string(),
        });
    }
    Ok(rows.remove(index))
}

pub fn row_mut<'a, T>(rows: &'a mut [T], list: &str, index: usize) -> Result<&'a mut T, FormError> {
    rows.get_mut(index).ok_or_else(|| FormError::RowOutOfRange {
        list: list.to_string(),
        index,
    })
}
