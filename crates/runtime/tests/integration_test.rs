use std::sync::Arc;

use raid_core::{
    ActionError, BossInstanceId, ClaimRejection, GameEvent, GameState, Identity, KillSequence,
    TokenId,
};
use raid_runtime::{
    Event, FileStateRepository, InMemoryStateRepo, RepositoryError, Runtime, RuntimeError,
    StateRepository, Topic,
};

const OWNER: &str = "0x0wner";
const ALICE: &str = "0xa11ce";
const BOB: &str = "0xb0b";
const PUNK: &str = "0x16F5A35647D6F03D5D3da7b35409D65ba03aF3B2";

async fn start() -> Runtime {
    Runtime::builder()
        .initial_state(GameState::new(Identity::new(OWNER)))
        .build()
        .await
        .expect("runtime should start")
}

fn rejection(result: Result<impl std::fmt::Debug, RuntimeError>) -> ActionError {
    result
        .expect_err("request should be rejected")
        .rejection()
        .cloned()
        .expect("engine rejection")
}

/// Boss (hp 5, damage 15, reward 75): one attack kills it, the killer claims
/// token #1 exactly once.
#[tokio::test]
async fn kill_and_claim_scenario() {
    let runtime = start().await;
    let handle = runtime.handle();
    let mut notifications = handle.subscribe(Topic::Notifications);

    let instance = handle
        .create_or_update_boss(OWNER, PUNK, "Punk", 5, 15, 75)
        .await
        .unwrap();
    assert_eq!(instance, BossInstanceId(1));

    handle.create_character(ALICE, "Alice").await.unwrap();

    let outcome = handle.attack(ALICE).await.unwrap();
    assert_eq!(outcome.boss_hp, 0);
    assert_eq!(outcome.kill_sequence, Some(KillSequence(1)));

    let boss = handle.active_boss().await.unwrap();
    assert_eq!(boss.hp, 0);
    assert_eq!(boss.reward, 75);

    let token = handle.claim_rewards(ALICE, instance).await.unwrap();
    assert_eq!(token.id, TokenId(1));
    assert_eq!(token.reward, 75);
    assert_eq!(handle.balance_of(ALICE).unwrap(), 1);
    assert_eq!(
        handle.owner_of(TokenId(1)).unwrap(),
        Some(Identity::new(ALICE))
    );

    let second = rejection(handle.claim_rewards(ALICE, instance).await);
    assert_eq!(second.claim_rejection(), Some(ClaimRejection::AlreadyClaimed));
    assert_eq!(handle.balance_of(ALICE).unwrap(), 1);

    let mut names = Vec::new();
    while let Ok(Event::Notification(notification)) = notifications.try_recv() {
        names.push(notification.event.name());
    }
    assert_eq!(
        names,
        [
            "boss_created_or_updated",
            "character_created",
            "attack_round",
            "boss_killed",
            "reward_granted",
        ]
    );

    drop(handle);
    runtime.shutdown().await.unwrap();
}

/// Alice dies against a strong boss; Bob, levelled up by the operator, heals
/// her once. A second heal is refused.
#[tokio::test]
async fn death_and_revival_scenario() {
    let runtime = start().await;
    let handle = runtime.handle();

    handle
        .create_or_update_boss(OWNER, PUNK, "Punk", 5_000, 2_000, 75)
        .await
        .unwrap();
    handle.create_character(ALICE, "Alice").await.unwrap();
    handle.create_character(BOB, "Bob").await.unwrap();

    let outcome = handle.attack(ALICE).await.unwrap();
    assert!(outcome.attacker_died);

    let dead = rejection(handle.attack(ALICE).await);
    assert!(matches!(dead, ActionError::CharacterDead { .. }));

    let change = handle.give_xp(OWNER, BOB, 100).await.unwrap();
    assert_eq!(change.level, 2);

    handle.heal(BOB, ALICE).await.unwrap();
    let alice = handle.character(ALICE).await.unwrap().unwrap();
    assert!(alice.is_alive());
    assert_eq!(alice.hp, alice.max_hp);

    let again = rejection(handle.heal(BOB, ALICE).await);
    assert!(matches!(again, ActionError::InvalidHealTarget { .. }));
}

#[tokio::test]
async fn rejections_are_published_and_leave_state_untouched() {
    let runtime = start().await;
    let handle = runtime.handle();
    let mut topics = handle.subscribe_multiple(&[Topic::Notifications, Topic::Rejections]);
    let mut notifications = topics.remove(&Topic::Notifications).unwrap();
    let mut rejections = topics.remove(&Topic::Rejections).unwrap();

    handle.create_character(ALICE, "Alice").await.unwrap();
    let before = handle.query_state().await.unwrap();
    assert!(matches!(
        notifications.recv().await,
        Ok(Event::Notification(_))
    ));

    let error = rejection(handle.create_or_update_boss(ALICE, PUNK, "Punk", 1, 1, 1).await);
    assert!(matches!(error, ActionError::Unauthorized { .. }));

    let spell = rejection(handle.cast_spell(ALICE).await);
    assert!(matches!(
        spell,
        ActionError::InsufficientLevel {
            level: 1,
            required: 2
        }
    ));

    assert_eq!(handle.query_state().await.unwrap(), before);
    assert!(notifications.try_recv().is_err());

    let Ok(Event::Rejection(first)) = rejections.recv().await else {
        panic!("expected a rejection event");
    };
    assert_eq!(first.error_code, "ACTION_UNAUTHORIZED");
    assert_eq!(first.nonce, before.nonce);
    assert_eq!(first.action.caller, Identity::new(ALICE));

    let Ok(Event::Rejection(second)) = rejections.recv().await else {
        panic!("expected a rejection event");
    };
    assert_eq!(second.error_code, "ACTION_INSUFFICIENT_LEVEL");
}

#[tokio::test]
async fn operator_transfer_and_owner_query() {
    let runtime = start().await;
    let handle = runtime.handle();

    assert_eq!(handle.owner().await.unwrap(), Identity::new(OWNER));
    handle.transfer_operator(OWNER, BOB).await.unwrap();
    assert_eq!(handle.owner().await.unwrap(), Identity::new(BOB));

    let error = rejection(handle.give_xp(OWNER, BOB, 10).await);
    assert!(matches!(error, ActionError::Unauthorized { .. }));
}

#[tokio::test]
async fn file_repository_resumes_latest_state() {
    let dir = tempfile::tempdir().unwrap();
    let repository = Arc::new(FileStateRepository::new(dir.path()).unwrap());

    let runtime = Runtime::builder()
        .initial_state(GameState::new(Identity::new(OWNER)))
        .repository(repository.clone())
        .build()
        .await
        .unwrap();
    let handle = runtime.handle();
    handle
        .create_or_update_boss(OWNER, PUNK, "Punk", 5, 15, 75)
        .await
        .unwrap();
    handle.create_character(ALICE, "Alice").await.unwrap();
    handle.attack(ALICE).await.unwrap();
    handle
        .claim_rewards(ALICE, BossInstanceId(1))
        .await
        .unwrap();
    let root = handle.state_root().await.unwrap();
    drop(handle);
    runtime.shutdown().await.unwrap();

    assert_eq!(repository.list_nonces().unwrap(), vec![0, 1, 2, 3, 4]);

    let resumed = Runtime::builder()
        .repository(Arc::new(FileStateRepository::new(dir.path()).unwrap()))
        .build()
        .await
        .unwrap();
    let handle = resumed.handle();

    assert_eq!(handle.state_root().await.unwrap(), root);
    assert_eq!(handle.balance_of(ALICE).unwrap(), 1);
    assert_eq!(handle.query_state().await.unwrap().nonce, 4);
}

async fn resume(dir: &std::path::Path) -> Runtime {
    Runtime::builder()
        .repository(Arc::new(FileStateRepository::new(dir).unwrap()))
        .build()
        .await
        .expect("runtime should resume")
}

/// Two runtimes resumed from one directory race for the same nonce: the
/// second commit is refused instead of replacing the first.
#[tokio::test]
async fn concurrent_runtimes_cannot_overwrite_a_commit() {
    let dir = tempfile::tempdir().unwrap();

    let init = Runtime::builder()
        .initial_state(GameState::new(Identity::new(OWNER)))
        .repository(Arc::new(FileStateRepository::new(dir.path()).unwrap()))
        .build()
        .await
        .unwrap();
    init.shutdown().await.unwrap();

    let first = resume(dir.path()).await;
    let second = resume(dir.path()).await;
    let mut rejections = second.handle().subscribe(Topic::Rejections);

    first
        .handle()
        .create_character(ALICE, "Alice")
        .await
        .unwrap();
    let result = second.handle().create_character(BOB, "Bob").await;
    assert!(matches!(
        result,
        Err(RuntimeError::Repository(RepositoryError::Conflict { nonce: 1 }))
    ));
    assert_eq!(second.handle().query_state().await.unwrap().nonce, 0);
    assert!(rejections.try_recv().is_err());

    first.shutdown().await.unwrap();
    second.shutdown().await.unwrap();

    let reopened = resume(dir.path()).await;
    let state = reopened.handle().query_state().await.unwrap();
    assert_eq!(state.nonce, 1);
    assert!(state.character(&Identity::new(ALICE)).is_some());
    assert!(state.character(&Identity::new(BOB)).is_none());
}

#[tokio::test]
async fn empty_repository_without_state_fails_to_build() {
    let result = Runtime::builder()
        .repository(Arc::new(InMemoryStateRepo::new()))
        .build()
        .await;
    assert!(matches!(result, Err(RuntimeError::MissingState)));
}

/// Accepts the initial state, then refuses every later save.
struct ReadOnlyAfterInit {
    inner: InMemoryStateRepo,
}

impl StateRepository for ReadOnlyAfterInit {
    fn save(&self, nonce: u64, state: &GameState) -> raid_runtime::repository::Result<()> {
        if nonce == 0 {
            return self.inner.save(nonce, state);
        }
        Err(RepositoryError::Io(std::io::Error::other("disk full")))
    }

    fn load(&self, nonce: u64) -> raid_runtime::repository::Result<Option<GameState>> {
        self.inner.load(nonce)
    }

    fn exists(&self, nonce: u64) -> bool {
        self.inner.exists(nonce)
    }

    fn delete(&self, nonce: u64) -> raid_runtime::repository::Result<()> {
        self.inner.delete(nonce)
    }

    fn list_nonces(&self) -> raid_runtime::repository::Result<Vec<u64>> {
        self.inner.list_nonces()
    }
}

#[tokio::test]
async fn failed_persistence_discards_commit() {
    let runtime = Runtime::builder()
        .initial_state(GameState::new(Identity::new(OWNER)))
        .repository(Arc::new(ReadOnlyAfterInit {
            inner: InMemoryStateRepo::new(),
        }))
        .build()
        .await
        .unwrap();
    let handle = runtime.handle();
    let mut notifications = handle.subscribe(Topic::Notifications);

    let result = handle.create_character(ALICE, "Alice").await;
    assert!(matches!(result, Err(RuntimeError::Repository(_))));

    let state = handle.query_state().await.unwrap();
    assert_eq!(state.nonce, 0);
    assert!(state.character(&Identity::new(ALICE)).is_none());
    assert!(notifications.try_recv().is_err());
}

#[tokio::test]
async fn notifications_carry_commit_nonce() {
    let runtime = start().await;
    let handle = runtime.handle();
    let mut notifications = handle.subscribe(Topic::Notifications);

    handle.create_character(BOB, "Bob").await.unwrap();

    let Ok(Event::Notification(notification)) = notifications.recv().await else {
        panic!("expected a notification");
    };
    assert_eq!(notification.nonce, 1);
    assert_eq!(
        notification.event,
        GameEvent::CharacterCreated {
            owner: Identity::new(BOB)
        }
    );
}
