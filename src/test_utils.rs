mod sink_tester;

pub use sink_tester::*;
