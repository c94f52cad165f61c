//! Typst markup for the certificate overlay.

use chrono::NaiveDateTime;

use super::assets::FontSelection;
use super::common::{escape_typst_string, format_date, format_time, replace_non_latin1};
use crate::conversation::NosudInput;

pub const QR_FILE: &str = "qr.svg";
const QR_SIZE_PT: u32 = 140;

const ROW_HELPER: &str = r#"#let row(body, size: 12pt, bold: false) = block(
  above: 6pt,
  below: 6pt,
  text(size: size, weight: if bold { "bold" } else { "regular" }, body),
)
"#;

/// Values printed on one certificate.
pub struct NosudLayout<'a> {
    pub input: &'a NosudInput,
    pub doc_id: &'a str,
    pub serial_no: &'a str,
    pub generated_at: &'a NaiveDateTime,
    pub admin_info: Option<&'a str>,
    pub pin: &'a str,
    pub verify_url: &'a str,
}

impl NosudLayout<'_> {
    /// Labeled lines in print order: `(text, size_pt, bold)`.
    pub fn lines(&self) -> Vec<(String, u32, bool)> {
        let stamp = format!(
            "{} {}",
            format_date(self.generated_at),
            format_time(self.generated_at)
        );

        let mut lines = vec![
            ("Справка о несудимости — сведения".to_string(), 16, true),
            (format!("ФИО: {}", self.input.full_name()), 12, false),
            (format!("Дата рождения: {}", self.input.birth_date), 12, false),
            (format!("ПИНФЛ: {}", self.input.pinfl), 12, false),
            (format!("Документ №: {}", self.doc_id), 12, false),
            (format!("Серийный №: {}", self.serial_no), 12, false),
            (format!("Дата и время генерации: {}", stamp), 12, false),
            (format!("(дублируется) {}", stamp), 12, false),
        ];
        if let Some(admin_info) = self.admin_info {
            lines.push((format!("Информация админа: {}", admin_info), 12, false));
        }
        lines.push((format!("PIN-код для доступа: {}", self.pin), 12, false));
        lines.push((
            format!("Сканируйте QR-код или перейдите по ссылке: {}", self.verify_url),
            10,
            false,
        ));
        lines
    }

    /// Full Typst document. `template` is the background file name, if any.
    pub fn to_typst(&self, template: Option<&str>, font: &FontSelection) -> String {
        let mut source = String::new();

        let background = template
            .map(|file| {
                format!(
                    ", background: image(\"{}\", width: 100%, height: 100%)",
                    escape_typst_string(file)
                )
            })
            .unwrap_or_default();
        source.push_str(&format!(
            "#set page(paper: \"a4\", margin: 50pt{})\n",
            background
        ));

        match font {
            FontSelection::Unicode { family, .. } => source.push_str(&format!(
                "#set text(font: \"{}\", size: 12pt)\n",
                escape_typst_string(family)
            )),
            FontSelection::Fallback => source.push_str("#set text(size: 12pt)\n"),
        }
        source.push_str(ROW_HELPER);
        source.push('\n');

        for (text, size, bold) in self.lines() {
            let text = if font.is_unicode() {
                text
            } else {
                replace_non_latin1(&text)
            };
            source.push_str(&format!(
                "#row(\"{}\", size: {}pt, bold: {})\n",
                escape_typst_string(&text),
                size,
                bold
            ));
        }

        source.push_str(&format!(
            "\n#place(bottom + right, image(\"{}\", width: {}pt))\n",
            QR_FILE, QR_SIZE_PT
        ));
        source
    }
}
