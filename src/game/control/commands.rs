use bevy::prelude::*;

use crate::game::board::{BuildingKind, UnitKind};
use crate::game::economy::{PlayerResources, FOOTMAN_GOLD_COST, PEASANT_GOLD_COST};
use crate::game::notice::GameNotice;

use super::messages::IssueCommand;

/// Everything the command card can ask for. Closed set: dispatch is an
/// exhaustive match, so an unhandled command cannot exist.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommandAction {
    Move,
    Attack,
    Patrol,
    HoldPosition,
    Gather,
    Build,
    Repair,
    CastSpell,
    TrainPeasant,
    TrainFootman,
    TrainArcher,
    UpgradeAttack,
    UpgradeArmor,
    Research,
    UpgradeTown,
    CallToArms,
}

impl CommandAction {
    pub fn label(&self) -> &'static str {
        match self {
            CommandAction::Move => "Move",
            CommandAction::Attack => "Attack",
            CommandAction::Patrol => "Patrol",
            CommandAction::HoldPosition => "Hold Position",
            CommandAction::Gather => "Gather",
            CommandAction::Build => "Build",
            CommandAction::Repair => "Repair",
            CommandAction::CastSpell => "Cast Spell",
            CommandAction::TrainPeasant => "Train Peasant",
            CommandAction::TrainFootman => "Train Footman",
            CommandAction::TrainArcher => "Train Archer",
            CommandAction::UpgradeAttack => "Upgrade Attack",
            CommandAction::UpgradeArmor => "Upgrade Armor",
            CommandAction::Research => "Research",
            CommandAction::UpgradeTown => "Upgrade",
            CommandAction::CallToArms => "Call to Arms",
        }
    }
}

/// Command card for a selection led by a unit of the given kind.
pub fn unit_commands(kind: UnitKind) -> &'static [CommandAction] {
    match kind {
        UnitKind::Hero => &[
            CommandAction::Move,
            CommandAction::Attack,
            CommandAction::CastSpell,
            CommandAction::HoldPosition,
        ],
        UnitKind::Worker => &[
            CommandAction::Move,
            CommandAction::Gather,
            CommandAction::Build,
            CommandAction::Repair,
        ],
        UnitKind::Warrior | UnitKind::Archer => &[
            CommandAction::Move,
            CommandAction::Attack,
            CommandAction::Patrol,
            CommandAction::HoldPosition,
        ],
    }
}

/// Command card for a selected building.
pub fn building_commands(kind: BuildingKind) -> &'static [CommandAction] {
    match kind {
        BuildingKind::Barracks => &[
            CommandAction::TrainFootman,
            CommandAction::TrainArcher,
            CommandAction::UpgradeAttack,
            CommandAction::UpgradeArmor,
        ],
        BuildingKind::TownHall => &[
            CommandAction::TrainPeasant,
            CommandAction::Research,
            CommandAction::UpgradeTown,
            CommandAction::CallToArms,
        ],
        BuildingKind::Farm | BuildingKind::Tower => &[],
    }
}

/// Run command-card actions. Targeted commands only tell the player what to
/// do next; training debits gold and bumps the food counter. Nothing is
/// produced or scheduled, this mockup stops at the resource change.
pub fn handle_commands(
    mut reader: MessageReader<IssueCommand>,
    mut resources: ResMut<PlayerResources>,
    mut notices: MessageWriter<GameNotice>,
) {
    for IssueCommand(action) in reader.read() {
        match action {
            CommandAction::Move => {
                notices.write(GameNotice::info("Click where you want to move"));
            }
            CommandAction::Attack => {
                notices.write(GameNotice::warning("Click target to attack"));
            }
            CommandAction::Build => {
                notices.write(GameNotice::info("Select building location"));
            }
            CommandAction::CastSpell => {
                notices.write(GameNotice::info("Select spell target"));
            }
            CommandAction::TrainPeasant => {
                if resources.gold >= PEASANT_GOLD_COST {
                    resources.gold -= PEASANT_GOLD_COST;
                    resources.food += 1;
                    notices.write(GameNotice::info("Training Peasant..."));
                } else {
                    notices.write(GameNotice::error("Not enough gold!"));
                }
            }
            CommandAction::TrainFootman => {
                if resources.gold >= FOOTMAN_GOLD_COST {
                    resources.gold -= FOOTMAN_GOLD_COST;
                    resources.food += 1;
                    notices.write(GameNotice::info("Training Footman..."));
                } else {
                    notices.write(GameNotice::error("Not enough resources!"));
                }
            }
            other => {
                notices.write(GameNotice::info(format!("Executing {}...", other.label())));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hero_card_leads_with_move() {
        let card = unit_commands(UnitKind::Hero);
        assert_eq!(
            card,
            &[
                CommandAction::Move,
                CommandAction::Attack,
                CommandAction::CastSpell,
                CommandAction::HoldPosition,
            ]
        );
    }

    #[test]
    fn worker_card_has_no_attack() {
        let card = unit_commands(UnitKind::Worker);
        assert!(!card.contains(&CommandAction::Attack));
        assert!(card.contains(&CommandAction::Build));
        assert!(card.contains(&CommandAction::Repair));
    }

    #[test]
    fn combat_units_share_a_card() {
        assert_eq!(unit_commands(UnitKind::Warrior), unit_commands(UnitKind::Archer));
    }

    #[test]
    fn barracks_trains_footmen_and_archers() {
        let card = building_commands(BuildingKind::Barracks);
        assert_eq!(card[0], CommandAction::TrainFootman);
        assert_eq!(card[1], CommandAction::TrainArcher);
    }

    #[test]
    fn passive_buildings_have_empty_cards() {
        assert!(building_commands(BuildingKind::Farm).is_empty());
        assert!(building_commands(BuildingKind::Tower).is_empty());
    }

    #[test]
    fn every_action_has_a_label() {
        let all = [
            CommandAction::Move,
            CommandAction::Attack,
            CommandAction::Patrol,
            CommandAction::HoldPosition,
            CommandAction::Gather,
            CommandAction::Build,
            CommandAction::Repair,
            CommandAction::CastSpell,
            CommandAction::TrainPeasant,
            CommandAction::TrainFootman,
            CommandAction::TrainArcher,
            CommandAction::UpgradeAttack,
            CommandAction::UpgradeArmor,
            CommandAction::Research,
            CommandAction::UpgradeTown,
            CommandAction::CallToArms,
        ];
        for action in all {
            assert!(!action.label().is_empty());
        }
    }
}
