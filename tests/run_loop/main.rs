//! Run loop integration tests
//!
//! Drive the full generate → encode → publish/print cycle against stub broker
//! clients, without a Kafka broker.

mod dry_run;
mod publish;
mod stubs;
