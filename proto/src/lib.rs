//! Protobuf contracts for the racing and sports query services.
//!
//! `common` carries the types both services share (sort options and the
//! derived event status); `racing` and `sports` carry each service's
//! requests, responses and records.

pub mod common {
    tonic::include_proto!("common");
}

pub mod racing {
    tonic::include_proto!("racing");
}

pub mod sports {
    tonic::include_proto!("sports");
}
