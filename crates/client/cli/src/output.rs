//! Rendering of outcomes, events and query results.

use anyhow::Result;
use raid_core::{
    ActionResult, BossView, CharacterState, ExecutionOutcome, GameEvent, RewardToken,
};
use serde::Serialize;

use crate::config::OutputFormat;

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn print_outcome(format: OutputFormat, outcome: &ExecutionOutcome) -> Result<()> {
    if format == OutputFormat::Json {
        return print_json(outcome);
    }

    println!("committed at nonce {}", outcome.nonce);
    if let Some(summary) = summarize(&outcome.action_result) {
        println!("{summary}");
    }
    for event in &outcome.events {
        println!("  {}", describe(event));
    }
    Ok(())
}

fn summarize(result: &ActionResult) -> Option<String> {
    match result {
        ActionResult::BossCreated(instance) => Some(format!("active boss instance: {instance}")),
        ActionResult::ExperienceGranted(change) => Some(format!(
            "experience {} (level {} -> {})",
            change.experience, change.previous_level, change.level
        )),
        ActionResult::RewardClaimed(token) => Some(format!(
            "minted token #{} worth {}",
            token.id, token.reward
        )),
        _ => None,
    }
}

/// One-line human description of an event.
pub fn describe(event: &GameEvent) -> String {
    match event {
        GameEvent::BossCreatedOrUpdated {
            boss_key,
            boss_instance,
        } => format!("boss {boss_key} is now active as instance {boss_instance}"),
        GameEvent::CharacterCreated { owner } => format!("{owner} created a character"),
        GameEvent::ExperienceGranted {
            owner,
            amount,
            experience,
            level,
        } => format!("{owner} gained {amount} xp ({experience} total, level {level})"),
        GameEvent::LevelUp { owner, level } => format!("{owner} reached level {level}"),
        GameEvent::AttackRound {
            boss_instance,
            boss_hp,
            damage,
            attacker,
            boss_damage,
        } => format!(
            "{attacker} hit boss {boss_instance} for {damage} (boss hp {boss_hp}), took {boss_damage}"
        ),
        GameEvent::BossKilled {
            boss_instance,
            kill_sequence,
            killer,
        } => format!("{killer} killed boss {boss_instance} (kill #{kill_sequence})"),
        GameEvent::CharacterDied { owner } => format!("{owner} died"),
        GameEvent::CharacterRevived { healer, healed } => format!("{healer} revived {healed}"),
        GameEvent::RewardGranted {
            owner,
            token_id,
            reward,
            kill_sequence,
        } => format!("{owner} received token #{token_id} worth {reward} for kill #{kill_sequence}"),
        GameEvent::OperatorTransferred { previous, new } => {
            format!("operator role moved from {previous} to {new}")
        }
    }
}

pub fn print_boss(format: OutputFormat, boss: &BossView) -> Result<()> {
    if format == OutputFormat::Json {
        return print_json(boss);
    }
    if boss.is_sentinel() {
        println!("no active boss");
    } else {
        println!(
            "{} ({}): hp {}, damage {}, reward {}",
            boss.name, boss.key, boss.hp, boss.damage, boss.reward
        );
    }
    Ok(())
}

pub fn print_character(format: OutputFormat, character: &CharacterState) -> Result<()> {
    if format == OutputFormat::Json {
        return print_json(character);
    }
    println!(
        "{} ({}): {} hp {}/{}, level {}, xp {}",
        character.name,
        character.owner,
        character.status,
        character.hp,
        character.max_hp,
        character.level,
        character.experience
    );
    Ok(())
}

pub fn print_token(format: OutputFormat, token: &RewardToken) -> Result<()> {
    if format == OutputFormat::Json {
        return print_json(token);
    }
    println!(
        "token #{} owned by {}: reward {} from boss instance {} (kill #{})",
        token.id, token.owner, token.reward, token.boss_instance, token.kill_sequence
    );
    Ok(())
}
