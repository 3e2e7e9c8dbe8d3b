pub const GROUP_SIZE: usize = 4;
pub const GROUP_FIXTURE_COUNT: usize = 6;

/// Round-robin slate of a four-team group. The index of a pairing is the
/// fixture index used by score sheets, predictions and kick-off times, so the
/// order here must never change.
pub const GROUP_FIXTURES: [GroupFixture; GROUP_FIXTURE_COUNT] = [
    GroupFixture::new(0, 1),
    GroupFixture::new(2, 3),
    GroupFixture::new(0, 2),
    GroupFixture::new(1, 3),
    GroupFixture::new(0, 3),
    GroupFixture::new(1, 2),
];

/// Positions of the home and away team within the group roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupFixture {
    pub home: usize,
    pub away: usize,
}

impl GroupFixture {
    pub const fn new(home: usize, away: usize) -> Self {
        GroupFixture { home, away }
    }

    pub fn get(index: usize) -> Option<GroupFixture> {
        GROUP_FIXTURES.get(index).copied()
    }

    pub fn involves(&self, team_position: usize) -> bool {
        self.home == team_position || self.away == team_position
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_slate_order_is_fixed() {
        let pairs: Vec<(usize, usize)> = GROUP_FIXTURES.iter().map(|f| (f.home, f.away)).collect();

        assert_eq!(pairs, vec![(0, 1), (2, 3), (0, 2), (1, 3), (0, 3), (1, 2)]);
    }

    #[test]
    fn test_every_pair_meets_once() {
        let mut seen = HashSet::new();

        for fixture in GROUP_FIXTURES {
            assert_ne!(fixture.home, fixture.away);
            let key = (fixture.home.min(fixture.away), fixture.home.max(fixture.away));
            assert!(seen.insert(key), "pair {:?} scheduled twice", key);
        }

        assert_eq!(seen.len(), GROUP_SIZE * (GROUP_SIZE - 1) / 2);
    }

    #[test]
    fn test_each_team_plays_three_times() {
        for position in 0..GROUP_SIZE {
            let games = GROUP_FIXTURES.iter().filter(|f| f.involves(position)).count();
            assert_eq!(games, 3);
        }
    }

    #[test]
    fn test_get_out_of_range() {
        assert_eq!(GroupFixture::get(5), Some(GroupFixture::new(1, 2)));
        assert_eq!(GroupFixture::get(6), None);
    }
}
