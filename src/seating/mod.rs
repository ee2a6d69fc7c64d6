//! seating
//!
//! Движок подбора мест для компании зрителей на конкретный сеанс.
//!
//! Всё в этом модуле синхронно и не имеет побочных эффектов: на вход приходит
//! неизменяемый снимок зала ([`AuditoriumSeatingArrangement`]), на выход - до трёх
//! предложений на каждую ценовую категорию. Единственная "мутация" - `allocate`,
//! которая возвращает новый снимок, не трогая исходный.

pub mod adjacent;
pub mod auditorium;
pub mod distance;
pub mod option;
pub mod pricing;
pub mod recommender;
pub mod row;
pub mod seat;
pub mod suggestions;

pub use adjacent::AdjacentSeats;
pub use auditorium::AuditoriumSeatingArrangement;
pub use distance::DistanceFromRowCenter;
pub use option::{SeatingOption, SeatingOptionIsSuggested};
pub use pricing::PricingCategory;
pub use recommender::SeatingArrangementRecommender;
pub use row::Row;
pub use seat::{SeatingPlace, SeatingPlaceAvailability};
pub use suggestions::{SuggestionBatch, SuggestionIsMade, Suggestions, SuggestionsAreMade};
