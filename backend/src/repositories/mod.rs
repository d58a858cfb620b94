pub mod common;
pub mod contact_info;
pub mod feedback;
pub mod game;
pub mod player;
pub mod repository;
pub mod season;

pub use contact_info::ContactInfoRepository;
pub use feedback::FeedbackRepository;
pub use game::GameRepository;
pub use player::PlayerRepository;
pub use repository::SoftDeleteEntity;
pub use season::SeasonRepository;
