use crate::group::{GroupId, StandingsRow};
use crate::settings::DEFAULT_THIRDS_TO_ADVANCE;
use log::{debug, info};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GroupQualifiers {
    pub first: Option<String>,
    pub second: Option<String>,
    pub third: Option<String>,
}

impl GroupQualifiers {
    fn from_rows(rows: &[StandingsRow]) -> Self {
        let team = |rank: usize| rows.get(rank).map(|row| row.team.clone());

        GroupQualifiers {
            first: team(0),
            second: team(1),
            third: team(2),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThirdPlaceCandidate {
    pub group: GroupId,
    pub row: StandingsRow,
}

/// A third-placed team that made the cut, with its 1-based slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QualifiedThird {
    pub slot: usize,
    pub group: GroupId,
    pub team: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QualificationResult {
    pub groups: BTreeMap<GroupId, GroupQualifiers>,
    /// Every group's third, best first.
    pub ranked_thirds: Vec<ThirdPlaceCandidate>,
    /// Thirds that advance, ordered by slot.
    pub qualified_thirds: Vec<QualifiedThird>,
}

impl QualificationResult {
    pub fn group(&self, group: &str) -> Option<&GroupQualifiers> {
        self.groups.get(group)
    }

    pub fn third_place_slot(&self, group: &str) -> Option<usize> {
        self.qualified_thirds
            .iter()
            .find(|third| third.group == group)
            .map(|third| third.slot)
    }

    /// All teams reaching the knockout stage: winners, runners-up, then qualified thirds.
    pub fn knockout_teams(&self) -> Vec<&str> {
        let winners = self.groups.values().filter_map(|q| q.first.as_deref());
        let runners_up = self.groups.values().filter_map(|q| q.second.as_deref());
        let thirds = self.qualified_thirds.iter().map(|t| t.team.as_str());

        winners.chain(runners_up).chain(thirds).collect()
    }
}

pub fn compute_qualification(standings: &BTreeMap<GroupId, Vec<StandingsRow>>) -> QualificationResult {
    compute_qualification_with(standings, DEFAULT_THIRDS_TO_ADVANCE)
}

/// Takes ranked group tables and picks group qualifiers plus the best
/// `thirds_to_advance` third-placed teams. Thirds are ranked on the same
/// (points, goal difference, goals for) key as group rows; equal keys keep
/// group-id order.
pub fn compute_qualification_with(
    standings: &BTreeMap<GroupId, Vec<StandingsRow>>,
    thirds_to_advance: usize,
) -> QualificationResult {
    let groups: BTreeMap<GroupId, GroupQualifiers> = standings
        .iter()
        .map(|(group, rows)| (group.clone(), GroupQualifiers::from_rows(rows)))
        .collect();

    let mut ranked_thirds: Vec<ThirdPlaceCandidate> = standings
        .iter()
        .filter_map(|(group, rows)| {
            rows.get(2).map(|row| ThirdPlaceCandidate {
                group: group.clone(),
                row: row.clone(),
            })
        })
        .collect();

    ranked_thirds.sort_by(|a, b| StandingsRow::compare_rank(&a.row, &b.row));

    let qualified_thirds: Vec<QualifiedThird> = ranked_thirds
        .iter()
        .take(thirds_to_advance)
        .zip(1..)
        .map(|(candidate, slot)| QualifiedThird {
            slot,
            group: candidate.group.clone(),
            team: candidate.row.team.clone(),
        })
        .collect();

    for third in &qualified_thirds {
        debug!("third place slot {}: {} (group {})", third.slot, third.team, third.group);
    }

    info!(
        "qualification computed: {} groups, {} of {} thirds advance",
        groups.len(),
        qualified_thirds.len(),
        ranked_thirds.len()
    );

    QualificationResult {
        groups,
        ranked_thirds,
        qualified_thirds,
    }
}
