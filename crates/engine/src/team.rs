//! Static list of the people who built the service.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TeamMember {
    pub first_name: &'static str,
    pub last_name: &'static str,
}

const TEAM: [TeamMember; 2] = [
    TeamMember {
        first_name: "Idan",
        last_name: "Shany",
    },
    TeamMember {
        first_name: "Omer",
        last_name: "Keren Zvi",
    },
];

pub fn team_members() -> &'static [TeamMember] {
    &TEAM
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn team_is_fixed() {
        let names: Vec<_> = team_members()
            .iter()
            .map(|m| format!("{} {}", m.first_name, m.last_name))
            .collect();
        assert_eq!(names, ["Idan Shany", "Omer Keren Zvi"]);
    }
}
