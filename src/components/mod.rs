pub mod celebrate_button;
pub mod celebration_overlay;
pub mod thank_you_card;

pub use celebrate_button::CelebrateButton;
pub use celebration_overlay::CelebrationOverlay;
pub use thank_you_card::ThankYouCard;
