pub mod cancel;
pub mod completion;
pub mod multithreaded_search;
pub mod palindromer;
pub mod result;
pub mod search;
pub mod searchconfig;
pub mod seed;
