
pub use train_test::{PredictionRow, StructureLine, TestReport, TrainTestTask};
