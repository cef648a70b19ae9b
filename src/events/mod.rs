pub mod cues;
pub mod hover;
pub mod pointer;
pub mod scramble;
pub mod uplink;
