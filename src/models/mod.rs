pub mod auditorium;
pub mod reservation;
pub mod seat;

pub use auditorium::{AuditoriumDto, CorridorDto, SeatDto};
pub use reservation::ReservedSeatsDto;
pub use seat::SeatLayoutRecord;
