use crate::club::team::builder::TeamBuilder;
use crate::league::PointsSettings;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Identity of a team as stored on a match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamRef {
    pub id: u32,
    pub name: String,
}

impl TeamRef {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        TeamRef {
            id,
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: u32,
    pub name: String,
    pub strength: u8,

    pub played: u32,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_difference: i32,
    pub points: u32,
}

impl Team {
    pub fn new(id: u32, name: impl Into<String>, strength: u8) -> Self {
        Team {
            id,
            name: name.into(),
            strength,
            played: 0,
            won: 0,
            drawn: 0,
            lost: 0,
            goals_for: 0,
            goals_against: 0,
            goal_difference: 0,
            points: 0,
        }
    }

    pub fn with_strength(mut self, strength: u8) -> Self {
        self.strength = strength;
        self
    }

    pub fn builder() -> TeamBuilder {
        TeamBuilder::new()
    }

    pub fn reference(&self) -> TeamRef {
        TeamRef::new(self.id, self.name.clone())
    }

    pub fn reset_statistics(&mut self) {
        self.played = 0;
        self.won = 0;
        self.drawn = 0;
        self.lost = 0;
        self.goals_for = 0;
        self.goals_against = 0;
        self.goal_difference = 0;
        self.points = 0;
    }

    /// Credits one played match from this team's point of view.
    pub fn record_match(&mut self, scored: u8, conceded: u8, points: &PointsSettings) {
        self.played += 1;
        self.goals_for += scored as u32;
        self.goals_against += conceded as u32;

        match scored.cmp(&conceded) {
            Ordering::Greater => {
                self.won += 1;
                self.points = self.points.saturating_add(points.win);
            }
            Ordering::Equal => {
                self.drawn += 1;
                self.points = self.points.saturating_add(points.draw);
            }
            Ordering::Less => {
                self.lost += 1;
                self.points = self.points.saturating_add(points.loss);
            }
        }

        self.refresh_goal_difference();
    }

    pub fn refresh_goal_difference(&mut self) {
        self.goal_difference = self.goals_for as i32 - self.goals_against as i32;
    }
}
