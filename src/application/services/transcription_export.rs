use crate::domain::TranscriptionRecord;

pub const EXPORT_FILE_NAME: &str = "transcricoes.csv";
pub const EXPORT_CONTENT_TYPE: &str = "text/csv";
pub const TRANSLATION_CONTENT_TYPE: &str = "text/plain";

const FILENAME_COLUMN: &str = "filename";
const TRANSCRIPTION_COLUMN: &str = "transcription";
const TRANSLATION_COLUMN: &str = "translation";

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

/// Visible columns; `translation` only appears once some record carries one.
pub fn visible_columns(records: &[TranscriptionRecord]) -> Vec<&'static str> {
    let mut columns = vec![FILENAME_COLUMN, TRANSCRIPTION_COLUMN];
    if records.iter().any(|r| r.translation.is_some()) {
        columns.push(TRANSLATION_COLUMN);
    }
    columns
}

pub fn export_csv(records: &[TranscriptionRecord]) -> Result<Vec<u8>, ExportError> {
    let columns = visible_columns(records);
    let with_translation = columns.len() == 3;

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(&columns)?;

    for record in records {
        let mut row = vec![
            record.filename.as_deref().unwrap_or_default(),
            record.transcription.as_deref().unwrap_or_default(),
        ];
        if with_translation {
            row.push(record.translation.as_deref().unwrap_or_default());
        }
        writer.write_record(&row)?;
    }

    writer.into_inner().map_err(|e| ExportError::Io(e.into_error()))
}
