//! UseCase u101: обработка PDF документа
//!
//! Один экран: выбор PDF, отправка на сервис обработки, получение трёх
//! артефактов (Excel, JSON, граф).

pub mod api;
pub mod ui;
