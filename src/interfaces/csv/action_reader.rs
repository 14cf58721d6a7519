use crate::application::session::SelectionAction;
use crate::error::{ConfiguratorError, Result};
use serde::Deserialize;
use std::io::Read;

/// One row of an action script: `action,value`.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct ActionRecord {
    pub action: String,
    pub value: Option<String>,
}

impl ActionRecord {
    fn value(&self) -> Result<&str> {
        self.value
            .as_deref()
            .filter(|v| !v.is_empty())
            .ok_or_else(|| {
                ConfiguratorError::ValidationError(format!(
                    "Action '{}' requires a value",
                    self.action
                ))
            })
    }
}

impl TryFrom<ActionRecord> for SelectionAction {
    type Error = ConfiguratorError;

    fn try_from(record: ActionRecord) -> Result<Self> {
        let action = match record.action.as_str() {
            "product" => SelectionAction::ChangeProductType(record.value()?.parse()?),
            "size" => SelectionAction::SetSize(record.value()?.parse()?),
            "layers" => {
                let value = record.value()?;
                let layers = value.parse().map_err(|_| {
                    ConfiguratorError::ValidationError(format!(
                        "Layers '{}' is not a number",
                        value
                    ))
                })?;
                SelectionAction::SetLayers(layers)
            }
            "flavor" => SelectionAction::SetFlavor(record.value()?.to_string()),
            "addon" => SelectionAction::ToggleAddon(record.value()?.parse()?),
            // Empty text is a valid way to clear the writing.
            "text" => SelectionAction::SetText(record.value.clone().unwrap_or_default()),
            "shape" => SelectionAction::SetShape(record.value()?.parse()?),
            "box_size" => SelectionAction::SetBoxSize(record.value()?.parse()?),
            "box_flavor" => SelectionAction::ToggleBoxFlavor(record.value()?.to_string()),
            "reset" => SelectionAction::StartOver,
            other => {
                return Err(ConfiguratorError::ValidationError(format!(
                    "Unknown action '{}'",
                    other
                )));
            }
        };
        Ok(action)
    }
}

/// Reads selection actions from a CSV source.
///
/// Wraps `csv::Reader`, trimming whitespace and accepting rows without a value
/// column. Values are trimmed even when quoted, so cake text read from a script
/// never starts or ends with a space. Each row yields its own `Result`, so one bad row does not stop the
/// rest of the script.
pub struct ActionReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> ActionReader<R> {
    /// Creates a new `ActionReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and decodes actions.
    pub fn actions(self) -> impl Iterator<Item = Result<SelectionAction>> {
        self.reader
            .into_deserialize::<ActionRecord>()
            .map(|result| {
                let record = result?;
                SelectionAction::try_from(record)
            })
    }
}
