pub mod thank_you;
