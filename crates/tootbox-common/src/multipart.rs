//! `multipart/form-data` bodies for upload endpoints.
//!
//! The transport only moves `Vec<u8>` bodies, so forms are encoded up front
//! into a single buffer together with the matching `Content-Type`.

use bytes::Bytes;
use smol_str::SmolStr;

/// A file to upload: bytes plus the metadata the server sees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaFile {
    /// File name reported in the part's `Content-Disposition`
    pub file_name: SmolStr,
    /// MIME type of the part; `application/octet-stream` when unset
    pub content_type: Option<SmolStr>,
    /// File contents
    pub data: Bytes,
}

impl MediaFile {
    /// Create a file part from a name and its contents.
    pub fn new(file_name: impl Into<SmolStr>, data: impl Into<Bytes>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: None,
            data: data.into(),
        }
    }

    /// Set the MIME type of the file.
    pub fn with_content_type(mut self, content_type: impl Into<SmolStr>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }
}

/// One part of a multipart form.
#[derive(Debug, Clone)]
pub struct Part {
    name: SmolStr,
    file_name: Option<SmolStr>,
    content_type: Option<SmolStr>,
    data: Bytes,
}

impl Part {
    /// Plain text field.
    pub fn text(name: impl Into<SmolStr>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            file_name: None,
            content_type: None,
            data: Bytes::from(value.into()),
        }
    }

    /// File field.
    pub fn file(name: impl Into<SmolStr>, file: &MediaFile) -> Self {
        Self {
            name: name.into(),
            file_name: Some(file.file_name.clone()),
            content_type: Some(
                file.content_type
                    .clone()
                    .unwrap_or_else(|| SmolStr::new_static("application/octet-stream")),
            ),
            data: file.data.clone(),
        }
    }

    /// Field name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A multipart form with a fixed boundary.
#[derive(Debug, Clone)]
pub struct Form {
    boundary: String,
    parts: Vec<Part>,
}

impl Default for Form {
    fn default() -> Self {
        Self::new()
    }
}

impl Form {
    /// Empty form with a random boundary.
    pub fn new() -> Self {
        Self::with_boundary(format!(
            "tootbox-{:016x}{:016x}",
            rand::random::<u64>(),
            rand::random::<u64>()
        ))
    }

    /// Empty form with a caller-chosen boundary.
    pub fn with_boundary(boundary: impl Into<String>) -> Self {
        Self {
            boundary: boundary.into(),
            parts: Vec::new(),
        }
    }

    /// Append a part.
    pub fn part(mut self, part: Part) -> Self {
        self.parts.push(part);
        self
    }

    /// Boundary separating the parts.
    pub fn boundary(&self) -> &str {
        &self.boundary
    }

    /// Parts in insertion order.
    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    /// `Content-Type` header value for this form.
    pub fn content_type(&self) -> String {
        format!("multipart/form-data; boundary={}", self.boundary)
    }

    /// Encode the form body.
    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::new();
        for part in &self.parts {
            out.extend_from_slice(b"--");
            out.extend_from_slice(self.boundary.as_bytes());
            out.extend_from_slice(b"\r\n");
            out.extend_from_slice(b"Content-Disposition: form-data; name=\"");
            out.extend_from_slice(escape_quoted(&part.name).as_bytes());
            out.push(b'"');
            if let Some(file_name) = &part.file_name {
                out.extend_from_slice(b"; filename=\"");
                out.extend_from_slice(escape_quoted(file_name).as_bytes());
                out.push(b'"');
            }
            out.extend_from_slice(b"\r\n");
            if let Some(content_type) = &part.content_type {
                out.extend_from_slice(b"Content-Type: ");
                out.extend_from_slice(content_type.as_bytes());
                out.extend_from_slice(b"\r\n");
            }
            out.extend_from_slice(b"\r\n");
            out.extend_from_slice(&part.data);
            out.extend_from_slice(b"\r\n");
        }
        out.extend_from_slice(b"--");
        out.extend_from_slice(self.boundary.as_bytes());
        out.extend_from_slice(b"--\r\n");
        out
    }
}

// Quotes, CR and LF would end the header parameter early.
fn escape_quoted(value: &str) -> String {
    value
        .replace('"', "%22")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_single_file_part() {
        let file = MediaFile::new("me.png", &b"\x89PNG"[..]).with_content_type("image/png");
        let form = Form::with_boundary("XYZ").part(Part::file("avatar", &file));
        assert_eq!(form.content_type(), "multipart/form-data; boundary=XYZ");
        let expected = b"--XYZ\r\n\
Content-Disposition: form-data; name=\"avatar\"; filename=\"me.png\"\r\n\
Content-Type: image/png\r\n\
\r\n\
\x89PNG\r\n\
--XYZ--\r\n";
        assert_eq!(form.encode(), expected.to_vec());
    }

    #[test]
    fn text_parts_have_no_filename() {
        let form = Form::with_boundary("b").part(Part::text("note", "hi"));
        let body = String::from_utf8(form.encode()).unwrap();
        assert_eq!(
            body,
            "--b\r\nContent-Disposition: form-data; name=\"note\"\r\n\r\nhi\r\n--b--\r\n"
        );
    }

    #[test]
    fn file_without_type_is_octet_stream() {
        let form = Form::with_boundary("b").part(Part::file("avatar", &MediaFile::new("x", "1")));
        let body = String::from_utf8(form.encode()).unwrap();
        assert!(body.contains("Content-Type: application/octet-stream\r\n"));
    }

    #[test]
    fn quotes_in_file_names_are_escaped() {
        let file = MediaFile::new("a\"b.png", "1");
        let form = Form::with_boundary("b").part(Part::file("avatar", &file));
        let body = String::from_utf8(form.encode()).unwrap();
        assert!(body.contains("filename=\"a%22b.png\""));
    }

    #[test]
    fn random_boundaries_differ() {
        assert_ne!(Form::new().boundary(), Form::new().boundary());
    }
}
