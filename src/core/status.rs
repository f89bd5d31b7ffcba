//! Registry status codes and result reporting.

use serde::{Deserialize, Serialize};

/// Registration states returned by the FNS registry, indexed by status code.
///
/// Read-only, process-wide. The registry contract defines codes 0 through 12.
pub const STATUS_DESCRIPTIONS: [&str; 13] = [
    "Налогоплательщик зарегистрирован в ЕГРН и имел статус действующего в указанную дату",
    "Налогоплательщик зарегистрирован в ЕГРН, но не имел статус действующего в указанную дату",
    "Налогоплательщик зарегистрирован в ЕГРН",
    "Налогоплательщик с указанным ИНН зарегистрирован в ЕГРН (КПП не соответствует ИНН или не указан)",
    "Налогоплательщик с указанным ИНН не зарегистрирован в ЕГРН",
    "Некорректный ИНН",
    "Недопустимое количество символов ИНН",
    "Недопустимое количество символов КПП",
    "Недопустимые символы в ИНН",
    "Недопустимые символы в КПП",
    "КПП не должен использоваться при проверке ИП",
    "Некорректный формат даты",
    "некорректная дата (ранее 01.01.1991 или позднее текущей даты)",
];

/// Description used for codes outside the known table.
pub const UNKNOWN_STATUS: &str = "неизвестный статус";

/// One registry answer: an INN and the status code assigned to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResult {
    /// The INN this result refers to, as echoed by the registry.
    pub inn: String,
    /// Status code; 0..=12 per the registry contract.
    pub code: i32,
}

/// Look up the description for a status code, if the code is known.
pub fn describe(code: i32) -> Option<&'static str> {
    usize::try_from(code)
        .ok()
        .and_then(|i| STATUS_DESCRIPTIONS.get(i))
        .copied()
}

/// Render one report line for a registry result.
///
/// A code outside 0..=12 is a contract violation by the registry; the raw
/// code is still reported, with [`UNKNOWN_STATUS`] as the description, so
/// one bad entry never aborts the rest of the batch.
pub fn format_status_line(result: &StatusResult) -> String {
    let description = describe(result.code).unwrap_or(UNKNOWN_STATUS);
    format!("ИНН: {} Результат: {} - {}", result.inn, result.code, description)
}
