pub mod storage_change;
