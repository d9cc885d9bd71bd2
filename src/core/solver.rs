use std::time::Instant;

use bon::Builder;
use itertools::Itertools;

use crate::{
    core::{
        facility::FacilityId,
        solution::Solution,
        step::Step,
        week::{WINDOW_DAYS, WeeklyConsumption},
    },
    prelude::*,
    quantity::cost::Cost,
};

pub const DEFAULT_SWITCHING_PENALTY: Cost = Cost(5.0);

#[derive(Builder)]
pub struct Solver<'a> {
    weekly_consumption: &'a WeeklyConsumption,

    /// Charged for every day whose facility differs from the previous day's one.
    #[builder(default = DEFAULT_SWITCHING_PENALTY)]
    switching_penalty: Cost,
}

impl Solver<'_> {
    /// Find the cost-minimal assignment of one facility per day.
    ///
    /// Depth-first search over the days, trying the eligible facilities in their source order
    /// and abandoning a branch as soon as its accumulated cost reaches the best known total.
    /// Step costs are non-negative, so such a branch cannot improve anymore.
    ///
    /// Among equally cheap assignments, the first one enumerated wins.
    ///
    /// # Returns
    ///
    /// - [`Some`] [`Solution`], if there is at least one eligible facility.
    /// - [`None`], if no facility has complete data for the window.
    #[instrument(skip_all, fields(n_facilities = self.weekly_consumption.len()))]
    pub fn solve(&self) -> Option<Solution> {
        if self.weekly_consumption.is_empty() {
            warn!("no eligible facilities");
            return None;
        }

        let start_instant = Instant::now();
        info!(switching_penalty = ?self.switching_penalty, "optimizing…");
        let search = self.search();
        info!(
            elapsed = ?start_instant.elapsed(),
            n_visited = search.n_visited,
            n_pruned = search.n_pruned,
            total_cost = ?search.best.as_ref().map(|solution| solution.total_cost),
            "optimized",
        );
        search.best
    }

    /// Run the search in a fresh context, so that concurrent calls never share any state.
    fn search(&self) -> Search<'_> {
        let mut search = Search {
            candidates: self.weekly_consumption,
            switching_penalty: self.switching_penalty,
            path: Vec::with_capacity(WINDOW_DAYS),
            best: None,
            n_visited: 0,
            n_pruned: 0,
        };
        search.descend(0, Cost::ZERO);
        search
    }

    /// Price an arbitrary assignment with the same objective as the search.
    ///
    /// # Returns
    ///
    /// [`None`], if the assignment does not cover the window exactly,
    /// or names a facility without complete data.
    pub fn evaluate(&self, assignment: &[FacilityId]) -> Option<Cost> {
        if assignment.len() != WINDOW_DAYS {
            return None;
        }
        let energy: Cost = assignment
            .iter()
            .enumerate()
            .map(|(day_index, facility_id)| {
                self.weekly_consumption.get(*facility_id).map(|daily| Cost::from(daily[day_index]))
            })
            .sum::<Option<Cost>>()?;
        let penalties: Cost = assignment
            .iter()
            .tuple_windows()
            .filter(|(previous, next)| previous != next)
            .map(|_| self.switching_penalty)
            .sum();
        Some(energy + penalties)
    }

    /// Cheapest schedule that never switches, which is what the optimum is compared against.
    pub fn fixed_baseline(&self) -> Option<(FacilityId, Cost)> {
        self.weekly_consumption
            .iter()
            .filter_map(|(facility_id, _)| {
                self.evaluate(&[facility_id; WINDOW_DAYS]).map(|cost| (facility_id, cost))
            })
            .min_by_key(|(_, cost)| *cost)
    }
}

/// State of a single [`Solver::solve`] invocation.
struct Search<'a> {
    candidates: &'a WeeklyConsumption,
    switching_penalty: Cost,

    /// Steps chosen so far, pushed and popped while backtracking.
    path: Vec<Step>,

    best: Option<Solution>,
    n_visited: usize,
    n_pruned: usize,
}

impl Search<'_> {
    fn descend(&mut self, day_index: usize, accumulated_cost: Cost) {
        self.n_visited += 1;

        if let Some(best) = &self.best
            && accumulated_cost >= best.total_cost
        {
            self.n_pruned += 1;
            return;
        }

        if day_index == WINDOW_DAYS {
            if self.best.as_ref().is_none_or(|best| accumulated_cost < best.total_cost) {
                self.best = Some(Solution { total_cost: accumulated_cost, steps: self.path.clone() });
            }
            return;
        }

        let previous_facility_id = self.path.last().map(|step| step.facility_id);
        let candidates = self.candidates;
        for (facility_id, daily) in candidates.iter() {
            let energy = daily[day_index];
            let switching_penalty = if previous_facility_id.is_some_and(|id| id != facility_id) {
                self.switching_penalty
            } else {
                Cost::ZERO
            };
            let step = Step {
                day: day_index + 1,
                facility_id,
                energy,
                switching_penalty,
                cost: Cost::from(energy) + switching_penalty,
            };
            self.path.push(step);
            self.descend(day_index + 1, accumulated_cost + step.cost);
            self.path.pop();
        }
    }
}
