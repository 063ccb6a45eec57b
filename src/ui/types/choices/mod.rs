mod learner_choice;
mod output_choice;

pub use learner_choice::*;
pub use output_choice::*;
