pub mod diagnose_crop;
