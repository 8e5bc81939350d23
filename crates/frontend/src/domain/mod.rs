pub mod a001_gift;
