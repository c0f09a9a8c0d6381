//! `fr-agent` — household agents and their storage.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`household`]   | `Household`, `HouseholdState`, `Action`, `SesTier`, `Demographics` |
//! | [`store`]       | `HouseholdStore` (+ home-zone index), `AgentRngs`         |
//! | [`builder`]     | `HouseholdStoreBuilder` (fluent construction)             |
//! | [`survey`]      | `SurveyRecord`, semicolon/decimal-comma survey CSV loader |
//! | [`error`]       | `SurveyError`, `SurveyResult<T>`                          |
//!
//! # Feature flags
//!
//! | Flag      | Effect                                                     |
//! |-----------|------------------------------------------------------------|
//! | `fx-hash` | FxHash instead of SipHash for the home-zone index.         |
//! | `serde`   | Derives `Serialize`/`Deserialize` on the value types.      |

pub mod builder;
pub mod error;
pub mod household;
pub mod store;
pub mod survey;

#[cfg(test)]
mod tests;

pub use builder::HouseholdStoreBuilder;
pub use error::{SurveyError, SurveyResult};
pub use household::{Action, Demographics, Household, HouseholdState, SesTier};
pub use store::{AgentRngs, HouseholdStore};
pub use survey::{SurveyRecord, load_survey_csv, load_survey_reader};
