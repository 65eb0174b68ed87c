//! 日期欄位定義
//!
//! 欄位標記字元與寬度限制集中在 `FIELD_SPECS`，驗證器與擷取器共用同一份表

use derive_more::Display;

/// 萬用字元，只能出現在格式字串的開頭或結尾
pub const WILDCARD: char = '*';

/// 日期時間欄位
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateField {
    #[display("year")]
    Year,
    #[display("month")]
    Month,
    #[display("day")]
    Day,
    #[display("hour")]
    Hour,
    #[display("minute")]
    Minute,
    #[display("second")]
    Second,
}

/// 單一欄位的標記字元與允許寬度
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub marker: char,
    pub field: DateField,
    pub min_width: usize,
    pub max_width: usize,
}

/// 欄位設定表，順序與 `DateField` 宣告順序一致
pub static FIELD_SPECS: [FieldSpec; 6] = [
    FieldSpec {
        marker: 'y',
        field: DateField::Year,
        min_width: 4,
        max_width: 4,
    },
    FieldSpec {
        marker: 'M',
        field: DateField::Month,
        min_width: 1,
        max_width: 2,
    },
    FieldSpec {
        marker: 'd',
        field: DateField::Day,
        min_width: 1,
        max_width: 2,
    },
    FieldSpec {
        marker: 'h',
        field: DateField::Hour,
        min_width: 1,
        max_width: 2,
    },
    FieldSpec {
        marker: 'm',
        field: DateField::Minute,
        min_width: 1,
        max_width: 2,
    },
    FieldSpec {
        marker: 's',
        field: DateField::Second,
        min_width: 1,
        max_width: 2,
    },
];

impl DateField {
    pub const ALL: [Self; 6] = [
        Self::Year,
        Self::Month,
        Self::Day,
        Self::Hour,
        Self::Minute,
        Self::Second,
    ];

    #[must_use]
    pub fn from_marker(marker: char) -> Option<Self> {
        FIELD_SPECS
            .iter()
            .find(|spec| spec.marker == marker)
            .map(|spec| spec.field)
    }

    #[must_use]
    pub fn spec(self) -> &'static FieldSpec {
        &FIELD_SPECS[self as usize]
    }

    #[must_use]
    pub fn marker(self) -> char {
        self.spec().marker
    }
}

#[must_use]
pub fn is_field_marker(c: char) -> bool {
    DateField::from_marker(c).is_some()
}

/// 擷取出的欄位字串（保留前導零）
///
/// 格式中沒有出現的欄位為 `None`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateFields {
    pub year: Option<String>,
    pub month: Option<String>,
    pub day: Option<String>,
    pub hour: Option<String>,
    pub minute: Option<String>,
    pub second: Option<String>,
}

impl DateFields {
    #[must_use]
    pub fn get(&self, field: DateField) -> Option<&str> {
        match field {
            DateField::Year => self.year.as_deref(),
            DateField::Month => self.month.as_deref(),
            DateField::Day => self.day.as_deref(),
            DateField::Hour => self.hour.as_deref(),
            DateField::Minute => self.minute.as_deref(),
            DateField::Second => self.second.as_deref(),
        }
    }

    pub(crate) fn set(&mut self, field: DateField, value: String) {
        let slot = match field {
            DateField::Year => &mut self.year,
            DateField::Month => &mut self.month,
            DateField::Day => &mut self.day,
            DateField::Hour => &mut self.hour,
            DateField::Minute => &mut self.minute,
            DateField::Second => &mut self.second,
        };
        *slot = Some(value);
    }

    /// 依欄位順序列出已擷取的欄位
    pub fn iter(&self) -> impl Iterator<Item = (DateField, &str)> {
        DateField::ALL
            .into_iter()
            .filter_map(|field| self.get(field).map(|value| (field, value)))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_specs_follow_field_order() {
        for field in DateField::ALL {
            assert_eq!(field.spec().field, field);
        }
    }

    #[test]
    fn test_from_marker() {
        assert_eq!(DateField::from_marker('y'), Some(DateField::Year));
        assert_eq!(DateField::from_marker('M'), Some(DateField::Month));
        assert_eq!(DateField::from_marker('m'), Some(DateField::Minute));
        assert_eq!(DateField::from_marker('Y'), None);
        assert_eq!(DateField::from_marker(WILDCARD), None);
    }

    #[test]
    fn test_date_fields_set_and_iter() {
        let mut fields = DateFields::default();
        assert!(fields.is_empty());

        fields.set(DateField::Day, "31".to_string());
        fields.set(DateField::Year, "2019".to_string());

        let collected: Vec<_> = fields.iter().collect();
        assert_eq!(
            collected,
            vec![(DateField::Year, "2019"), (DateField::Day, "31")]
        );
        assert_eq!(fields.get(DateField::Month), None);
    }

    #[test]
    fn test_field_display() {
        assert_eq!(DateField::Year.to_string(), "year");
        assert_eq!(DateField::Second.to_string(), "second");
    }
}
