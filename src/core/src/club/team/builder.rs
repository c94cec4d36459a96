use crate::Team;

#[derive(Default)]
pub struct TeamBuilder {
    id: Option<u32>,
    name: Option<String>,
    strength: Option<u8>,
}

impl TeamBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: u32) -> Self {
        self.id = Some(id);
        self
    }

    pub fn name(mut self, name: String) -> Self {
        self.name = Some(name);
        self
    }

    pub fn strength(mut self, strength: u8) -> Self {
        self.strength = Some(strength);
        self
    }

    pub fn build(self) -> Result<Team, String> {
        Ok(Team::new(
            self.id.ok_or("id is required")?,
            self.name.ok_or("name is required")?,
            self.strength.ok_or("strength is required")?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_team() {
        let team = Team::builder()
            .id(4)
            .name(String::from("Trabzonspor"))
            .strength(3)
            .build()
            .unwrap();

        assert_eq!(team.id, 4);
        assert_eq!(team.name, "Trabzonspor");
        assert_eq!(team.strength, 3);
        assert_eq!(team.points, 0);
    }

    #[test]
    fn test_missing_field() {
        let result = Team::builder().id(1).strength(2).build();

        assert_eq!(result.unwrap_err(), "name is required");
    }
}
