use super::error::FormatError;
use super::field::{FIELD_SPECS, WILDCARD, is_field_marker};
use std::collections::HashMap;

/// 驗證日期格式字串
///
/// 規則：
/// - 重複出現的欄位字元（以及 `*`）必須連續
/// - `*` 最多一個，且只能在開頭或結尾
/// - 每個欄位的字元數必須符合 `FIELD_SPECS` 的寬度限制
/// - 至少要有一個欄位
///
/// # Errors
/// 格式不合法時回傳對應的 `FormatError`
pub fn validate_format(pattern: &str) -> Result<(), FormatError> {
    let mut frequencies: HashMap<char, usize> = HashMap::new();
    let mut last_char: Option<char> = None;

    for c in pattern.chars() {
        if is_field_marker(c) || c == WILDCARD {
            let freq = frequencies.entry(c).or_insert(0);
            *freq += 1;

            if *freq > 1 && last_char != Some(c) {
                return Err(FormatError::NonContiguous(c));
            }
        }
        last_char = Some(c);
    }

    let wildcards = frequencies.get(&WILDCARD).copied().unwrap_or(0);
    if wildcards > 1 {
        return Err(FormatError::MultipleWildcards);
    }
    if wildcards == 1 && !pattern.starts_with(WILDCARD) && !pattern.ends_with(WILDCARD) {
        return Err(FormatError::MisplacedWildcard);
    }

    let mut has_fields = false;
    for spec in &FIELD_SPECS {
        let Some(&count) = frequencies.get(&spec.marker) else {
            continue;
        };
        has_fields = true;

        if count >= spec.min_width && count <= spec.max_width {
            continue;
        }

        return Err(if spec.min_width == spec.max_width {
            FormatError::ExactWidth {
                marker: spec.marker,
                expected: spec.min_width,
                found: count,
            }
        } else {
            FormatError::TooManyChars {
                marker: spec.marker,
                max: spec.max_width,
            }
        });
    }

    if !has_fields {
        return Err(FormatError::NoFields);
    }

    Ok(())
}
