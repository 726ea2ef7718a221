use log::info;
use rayon::prelude::*;

use crate::draw::{Draw, Status};

/// Resolve independent draws in parallel, returning their statuses in order
pub fn solve_all(draws: &mut [Draw]) -> Vec<Status> {
    info!("Resolving {} draws in parallel", draws.len());
    draws.par_iter_mut().map(Draw::resolve).collect()
}
