//! Artifact kinds and identifier handling
//!
//! The service names every produced artifact with an opaque token carried as
//! the `filename` query parameter of the locators in [`UploadResponse`]. The
//! token is the only handle the client keeps; it is extracted here with exact
//! query-string parsing so the contract stays testable without a DOM URL
//! implementation.

use super::response::UploadResponse;

/// Вид артефакта, который сервис строит из загруженного PDF
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    /// Excel-таблица
    Excel,
    /// JSON с извлечёнными данными
    Json,
    /// HTML-визуализация графа
    Graph,
}

impl ArtifactKind {
    /// Retrieval endpoint on the processing service
    pub const fn endpoint_path(&self) -> &'static str {
        match self {
            ArtifactKind::Excel => "/download-excel",
            ArtifactKind::Json => "/download-json",
            ArtifactKind::Graph => "/download-graph",
        }
    }

    /// MIME type of the artifact body
    pub const fn mime_type(&self) -> &'static str {
        match self {
            ArtifactKind::Excel => {
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            }
            ArtifactKind::Json => "application/json",
            ArtifactKind::Graph => "text/html",
        }
    }

    /// Message for a retrieval attempted before this artifact exists
    pub const fn missing_message(&self) -> &'static str {
        match self {
            ArtifactKind::Excel => "No Excel file available for download.",
            ArtifactKind::Json => "No JSON file available for download.",
            ArtifactKind::Graph => "No graph available for visualization.",
        }
    }

    /// Message for a retrieval that reached the service and failed
    pub fn failure_message(&self, cause: &str) -> String {
        match self {
            ArtifactKind::Excel => format!("Failed to download Excel file: {}", cause),
            ArtifactKind::Json => format!("Failed to download JSON file: {}", cause),
            ArtifactKind::Graph => format!("Failed to visualize data: {}", cause),
        }
    }
}

/// Идентификаторы артефактов, известные сессии
///
/// Заполняется целиком из одного ответа сервиса: успешная загрузка заменяет
/// все три слота разом, частичный ответ оставляет отсутствующие слоты
/// пустыми. Слоты никогда не изменяются по одному.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessedArtifacts {
    pub excel_filename: Option<String>,
    pub json_filename: Option<String>,
    pub graph_filename: Option<String>,
}

impl ProcessedArtifacts {
    /// Build the full artifact record from one upload acknowledgement.
    ///
    /// Every slot comes from this response alone. A locator the service
    /// omitted, or one carrying no usable `filename`, leaves its slot empty
    /// without failing the others.
    pub fn from_response(response: &UploadResponse) -> Self {
        Self {
            excel_filename: response
                .excel_download_url
                .as_deref()
                .and_then(extract_filename_param),
            json_filename: response
                .json_download_url
                .as_deref()
                .and_then(extract_filename_param),
            graph_filename: response
                .graph_html_url
                .as_deref()
                .and_then(extract_filename_param),
        }
    }

    /// Identifier of one artifact, if the service produced it
    pub fn filename(&self, kind: ArtifactKind) -> Option<&str> {
        match kind {
            ArtifactKind::Excel => self.excel_filename.as_deref(),
            ArtifactKind::Json => self.json_filename.as_deref(),
            ArtifactKind::Graph => self.graph_filename.as_deref(),
        }
    }
}

/// Extract the `filename` query parameter from a service locator.
///
/// The locator may be absolute or relative; only the query string is
/// consulted. The value is percent-decoded ('+' counts as a space, as in
/// form encoding). An empty value counts as absent.
pub fn extract_filename_param(url: &str) -> Option<String> {
    let query = url.split_once('?')?.1;
    let query = query.split('#').next().unwrap_or(query);

    for pair in query.split('&') {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        if key != "filename" {
            continue;
        }

        let value = value.replace('+', " ");
        let decoded = match urlencoding::decode(&value) {
            Ok(v) => v.into_owned(),
            Err(_) => value.clone(),
        };

        if decoded.is_empty() {
            return None;
        }
        return Some(decoded);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(excel: Option<&str>, json: Option<&str>, graph: Option<&str>) -> UploadResponse {
        UploadResponse {
            excel_download_url: excel.map(str::to_string),
            json_download_url: json.map(str::to_string),
            graph_html_url: graph.map(str::to_string),
        }
    }

    #[test]
    fn test_extract_from_absolute_url() {
        assert_eq!(
            extract_filename_param("http://localhost:3000/download-excel?filename=r1.xlsx"),
            Some("r1.xlsx".to_string())
        );
    }

    #[test]
    fn test_extract_from_relative_url() {
        assert_eq!(
            extract_filename_param("/download-json?filename=r1.json"),
            Some("r1.json".to_string())
        );
    }

    #[test]
    fn test_extract_with_extra_params() {
        assert_eq!(
            extract_filename_param("/download-graph?token=abc&filename=g.html&v=2"),
            Some("g.html".to_string())
        );
    }

    #[test]
    fn test_extract_percent_decodes_value() {
        assert_eq!(
            extract_filename_param("/download-excel?filename=report%202024.xlsx"),
            Some("report 2024.xlsx".to_string())
        );
        assert_eq!(
            extract_filename_param("/download-excel?filename=report+2024.xlsx"),
            Some("report 2024.xlsx".to_string())
        );
    }

    #[test]
    fn test_extract_ignores_fragment() {
        assert_eq!(
            extract_filename_param("/download-graph?filename=g.html#section"),
            Some("g.html".to_string())
        );
    }

    #[test]
    fn test_extract_missing_param_is_none() {
        assert_eq!(extract_filename_param("/download-excel?file=r1.xlsx"), None);
        assert_eq!(extract_filename_param("/download-excel"), None);
    }

    #[test]
    fn test_extract_empty_value_is_none() {
        assert_eq!(extract_filename_param("/download-excel?filename="), None);
        assert_eq!(extract_filename_param("/download-excel?filename"), None);
    }

    #[test]
    fn test_from_response_fills_all_slots() {
        let artifacts = ProcessedArtifacts::from_response(&response(
            Some("/download-excel?filename=r1.xlsx"),
            Some("/download-json?filename=r1.json"),
            Some("/download-graph?filename=r1.html"),
        ));

        assert_eq!(artifacts.filename(ArtifactKind::Excel), Some("r1.xlsx"));
        assert_eq!(artifacts.filename(ArtifactKind::Json), Some("r1.json"));
        assert_eq!(artifacts.filename(ArtifactKind::Graph), Some("r1.html"));
    }

    #[test]
    fn test_from_response_partial_keeps_other_slots() {
        let artifacts = ProcessedArtifacts::from_response(&response(
            Some("/download-excel?filename=r1.xlsx"),
            None,
            Some("/download-graph?filename="),
        ));

        assert_eq!(artifacts.filename(ArtifactKind::Excel), Some("r1.xlsx"));
        assert_eq!(artifacts.filename(ArtifactKind::Json), None);
        assert_eq!(artifacts.filename(ArtifactKind::Graph), None);
    }

    #[test]
    fn test_from_response_replaces_every_slot() {
        let first = ProcessedArtifacts::from_response(&response(
            Some("/download-excel?filename=a.xlsx"),
            Some("/download-json?filename=a.json"),
            Some("/download-graph?filename=a.html"),
        ));
        let second = ProcessedArtifacts::from_response(&response(
            Some("/download-excel?filename=b.xlsx"),
            None,
            None,
        ));

        // A fresh response carries no trace of the previous one: the record
        // is rebuilt whole, never merged slot by slot.
        assert_ne!(first, second);
        assert_eq!(second.filename(ArtifactKind::Excel), Some("b.xlsx"));
        assert_eq!(second.filename(ArtifactKind::Json), None);
        assert_eq!(second.filename(ArtifactKind::Graph), None);
    }

    #[test]
    fn test_kind_endpoints_and_mime_types() {
        assert_eq!(ArtifactKind::Excel.endpoint_path(), "/download-excel");
        assert_eq!(ArtifactKind::Json.endpoint_path(), "/download-json");
        assert_eq!(ArtifactKind::Graph.endpoint_path(), "/download-graph");

        assert_eq!(
            ArtifactKind::Excel.mime_type(),
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
        );
        assert_eq!(ArtifactKind::Json.mime_type(), "application/json");
        assert_eq!(ArtifactKind::Graph.mime_type(), "text/html");
    }

    #[test]
    fn test_kind_messages() {
        assert_eq!(
            ArtifactKind::Excel.missing_message(),
            "No Excel file available for download."
        );
        assert_eq!(
            ArtifactKind::Json.missing_message(),
            "No JSON file available for download."
        );
        assert_eq!(
            ArtifactKind::Graph.missing_message(),
            "No graph available for visualization."
        );

        assert_eq!(
            ArtifactKind::Json.failure_message("HTTP error: 404"),
            "Failed to download JSON file: HTTP error: 404"
        );
        assert_eq!(
            ArtifactKind::Graph.failure_message("Request failed: timeout"),
            "Failed to visualize data: Request failed: timeout"
        );
    }
}
