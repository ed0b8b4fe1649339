//! UseCase u101: обработка PDF документа
//!
//! Пользователь загружает один PDF, сервис асинхронно строит по нему три
//! артефакта: Excel-таблицу, JSON с данными и HTML-визуализацию графа.
//! Здесь — форма ответа сервиса, правила допуска файла и извлечение
//! идентификаторов артефактов из локаторов.

pub mod artifact;
pub mod response;
pub mod selection;

pub use artifact::{extract_filename_param, ArtifactKind, ProcessedArtifacts};
pub use response::UploadResponse;
