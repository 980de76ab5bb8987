use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Backend-assigned identifier. The client never interprets it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentId(pub i64);

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    pub base_fee: u64,
    #[serde(default)]
    pub book_fee: u64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub notes: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Success body of the bulk-register endpoint: `{"status": "success", "count": 3}`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct UploadSummary {
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(default)]
    pub status: Option<String>,
}

/// One roster table row, already formatted for display.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentRow {
    pub id: StudentId,
    pub name: String,
    pub base_fee: String,
    pub book_fee: String,
    pub notes: String,
}

impl StudentRow {
    pub fn summary_line(&self) -> String {
        let mut line = format!("{} / {} / {}", self.name, self.base_fee, self.book_fee);
        if !self.notes.is_empty() {
            line.push_str(" / ");
            line.push_str(&self.notes);
        }
        line
    }
}

impl From<&Student> for StudentRow {
    fn from(student: &Student) -> Self {
        StudentRow {
            id: student.id,
            name: student.name.clone(),
            base_fee: format_won(student.base_fee),
            book_fee: format_won(student.book_fee),
            notes: student.notes.clone(),
        }
    }
}

/// Groups digits by thousands: 250000 -> "250,000".
pub fn format_amount(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn format_won(amount: u64) -> String {
    format!("{}원", format_amount(amount))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amounts_are_grouped_by_thousands() {
        assert_eq!(format_amount(0), "0");
        assert_eq!(format_amount(999), "999");
        assert_eq!(format_amount(1000), "1,000");
        assert_eq!(format_amount(250000), "250,000");
        assert_eq!(format_amount(1234567), "1,234,567");
    }

    #[test]
    fn roster_row_reads_name_and_fees() {
        let json = r#"[{"id":1,"name":"김철수","base_fee":250000,"book_fee":0,"notes":""}]"#;
        let students: Vec<Student> = serde_json::from_str(json).unwrap();
        let row = StudentRow::from(&students[0]);
        assert_eq!(row.summary_line(), "김철수 / 250,000원 / 0원");
    }

    #[test]
    fn null_notes_and_missing_book_fee_default() {
        let json = r#"{"id":7,"name":"이영희","base_fee":280000,"notes":null}"#;
        let student: Student = serde_json::from_str(json).unwrap();
        assert_eq!(student.book_fee, 0);
        assert_eq!(student.notes, "");
        assert_eq!(student.id.to_string(), "7");
    }

    #[test]
    fn upload_summary_tolerates_missing_count() {
        let summary: UploadSummary = serde_json::from_str(r#"{"status":"success"}"#).unwrap();
        assert_eq!(summary.count, None);
        let summary: UploadSummary = serde_json::from_str(r#"{"count":2}"#).unwrap();
        assert_eq!(summary.count, Some(2));
    }
}
