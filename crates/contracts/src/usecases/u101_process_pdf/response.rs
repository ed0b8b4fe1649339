use serde::{Deserialize, Serialize};

/// Ответ сервиса на `POST /upload`
///
/// Каждое поле — URL-образный локатор готового артефакта. Сервис может не
/// вернуть часть полей; такой артефакт считается недоступным, остальные
/// остаются рабочими.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    /// Локатор Excel-таблицы
    #[serde(default)]
    pub excel_download_url: Option<String>,

    /// Локатор JSON-файла с данными
    #[serde(default)]
    pub json_download_url: Option<String>,

    /// Локатор HTML-визуализации графа
    #[serde(default)]
    pub graph_html_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_full_payload() {
        let json = r#"{
            "excel_download_url": "/download-excel?filename=r1.xlsx",
            "json_download_url": "/download-json?filename=r1.json",
            "graph_html_url": "/download-graph?filename=r1.html"
        }"#;

        let response: UploadResponse = serde_json::from_str(json).unwrap();
        assert_eq!(
            response.excel_download_url.as_deref(),
            Some("/download-excel?filename=r1.xlsx")
        );
        assert_eq!(
            response.json_download_url.as_deref(),
            Some("/download-json?filename=r1.json")
        );
        assert_eq!(
            response.graph_html_url.as_deref(),
            Some("/download-graph?filename=r1.html")
        );
    }

    #[test]
    fn test_missing_fields_become_none() {
        let response: UploadResponse =
            serde_json::from_str(r#"{"excel_download_url": "/download-excel?filename=a.xlsx"}"#)
                .unwrap();
        assert!(response.excel_download_url.is_some());
        assert!(response.json_download_url.is_none());
        assert!(response.graph_html_url.is_none());
    }

    #[test]
    fn test_null_fields_become_none() {
        let response: UploadResponse = serde_json::from_str(
            r#"{"excel_download_url": null, "json_download_url": null, "graph_html_url": null}"#,
        )
        .unwrap();
        assert!(response.excel_download_url.is_none());
        assert!(response.json_download_url.is_none());
        assert!(response.graph_html_url.is_none());
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let response: UploadResponse = serde_json::from_str(
            r#"{"graph_html_url": "/download-graph?filename=g.html", "pages": 12}"#,
        )
        .unwrap();
        assert_eq!(
            response.graph_html_url.as_deref(),
            Some("/download-graph?filename=g.html")
        );
    }
}
