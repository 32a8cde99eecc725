use bytes::Bytes;

const MPEG_MIME: &str = "audio/mpeg";
const ACCEPTED_EXTENSIONS: [&str; 2] = ["mp3", "wav"];

/// How the normalizer treats a payload, decided from the declared content type only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclaredFormat {
    Mpeg,
    Canonical,
}

impl DeclaredFormat {
    pub fn from_mime(mime: &str) -> Self {
        let essence = mime.split(';').next().unwrap_or_default().trim();
        if essence.eq_ignore_ascii_case(MPEG_MIME) {
            Self::Mpeg
        } else {
            Self::Canonical
        }
    }
}

#[derive(Debug, Clone)]
pub struct UploadedAudio {
    pub data: Bytes,
    pub content_type: String,
    pub filename: Option<String>,
}

impl UploadedAudio {
    pub fn new(data: impl Into<Bytes>, content_type: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            content_type: content_type.into(),
            filename: None,
        }
    }

    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    pub fn declared_format(&self) -> DeclaredFormat {
        DeclaredFormat::from_mime(&self.content_type)
    }

    /// A missing filename is accepted; it is only used for display.
    pub fn has_accepted_extension(&self) -> bool {
        let Some(filename) = self.filename.as_deref() else {
            return true;
        };
        filename
            .rsplit_once('.')
            .map(|(_, ext)| {
                ACCEPTED_EXTENSIONS
                    .iter()
                    .any(|accepted| ext.eq_ignore_ascii_case(accepted))
            })
            .unwrap_or(false)
    }
}
