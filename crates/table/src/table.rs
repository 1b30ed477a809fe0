// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker table types.
use log::{debug, info};
use rand::{SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};

use cardroom_eval::{Card, Deck, Evaluator, Hand, HandValue, showdown};

use crate::{Player, Result, TableError};

/// The table configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfig {
    /// The number of seats.
    pub max_players: usize,
    /// The number of players required to start a game.
    pub min_players: usize,
    /// The number of hole cards dealt to each player.
    pub cards_per_player: usize,
    /// The number of board cards.
    pub cards_per_table: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            max_players: 10,
            min_players: 2,
            cards_per_player: 2,
            cards_per_table: 5,
        }
    }
}

impl TableConfig {
    /// Checks the configuration can seat and deal to all players, and that
    /// each player showdown hand has 5 to 7 cards.
    pub fn validate(&self) -> Result<()> {
        if self.min_players < 2 {
            return Err(TableError::InvalidConfig(format!(
                "min_players={} must be at least 2",
                self.min_players
            )));
        }

        if self.min_players > self.max_players {
            return Err(TableError::InvalidConfig(format!(
                "min_players={} must not exceed max_players={}",
                self.min_players, self.max_players
            )));
        }

        let hand_size = self.cards_per_player + self.cards_per_table;
        if !(5..=7).contains(&hand_size) {
            return Err(TableError::InvalidConfig(format!(
                "player and table cards {hand_size} must be 5 <= n <= 7"
            )));
        }

        if self.max_players * self.cards_per_player + self.cards_per_table > Deck::SIZE {
            return Err(TableError::InvalidConfig(format!(
                "{} players with {} cards and {} table cards need more than {} cards",
                self.max_players,
                self.cards_per_player,
                self.cards_per_table,
                Deck::SIZE
            )));
        }

        Ok(())
    }
}

/// A player hand at showdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerHand {
    /// The player name.
    pub name: String,
    /// The player cards followed by the board cards.
    pub hand: Hand,
    /// The hand value.
    pub value: HandValue,
}

/// The showdown result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Showdown {
    /// The hands of the players in seat order.
    pub hands: Vec<PlayerHand>,
    /// The players that tie for the best hand in seat order.
    pub winners: Vec<String>,
}

/// A poker table.
#[derive(Debug)]
pub struct Table {
    config: TableConfig,
    players: Vec<Player>,
    board: Vec<Card>,
    deck: Deck,
    rng: StdRng,
    game_started: bool,
}

impl Table {
    /// Creates a table with a randomly seeded deck.
    pub fn new(config: TableConfig) -> Result<Self> {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Creates a table that uses the given rng to shuffle the deck.
    pub fn with_rng(config: TableConfig, mut rng: StdRng) -> Result<Self> {
        config.validate()?;

        let deck = Deck::new_and_shuffled(&mut rng);
        Ok(Self {
            config,
            players: Vec::default(),
            board: Vec::default(),
            deck,
            rng,
            game_started: false,
        })
    }

    /// The table configuration.
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// The number of seats.
    pub fn table_size(&self) -> usize {
        self.config.max_players
    }

    /// The seated players in seat order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Gets a seated player.
    pub fn player(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.name() == name)
    }

    /// Gets a mutable reference to a seated player.
    pub fn player_mut(&mut self, name: &str) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.name() == name)
    }

    /// The board cards.
    pub fn board(&self) -> &[Card] {
        &self.board
    }

    /// The cards left in the deck.
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Checks if the game has started.
    pub fn game_started(&self) -> bool {
        self.game_started
    }

    /// Seats a player at the table.
    pub fn sit_player(&mut self, player: Player) -> Result<()> {
        if self.players.len() >= self.config.max_players {
            return Err(TableError::TableFull {
                max_players: self.config.max_players,
            });
        }

        if self.player(player.name()).is_some() {
            return Err(TableError::PlayerAlreadySeated(player.name().to_string()));
        }

        info!("Player {} joined the table", player.name());
        self.players.push(player);
        Ok(())
    }

    /// Removes a player from the table.
    pub fn remove_player(&mut self, name: &str) -> Result<Player> {
        let pos = self
            .players
            .iter()
            .position(|p| p.name() == name)
            .ok_or_else(|| TableError::PlayerNotFound(name.to_string()))?;

        info!("Player {name} left the table");
        Ok(self.players.remove(pos))
    }

    /// Starts the game with a freshly shuffled deck.
    pub fn start_game(&mut self) -> Result<()> {
        if self.players.len() < self.config.min_players {
            return Err(TableError::NotEnoughPlayers {
                seated: self.players.len(),
                required: self.config.min_players,
            });
        }

        self.reset_hand();
        self.game_started = true;

        info!("Game started with {} players", self.players.len());
        Ok(())
    }

    /// Deals one card at a time to each player and then the board cards.
    ///
    /// Nothing is dealt if a player or the board already hold cards, or if
    /// the deck doesn't have enough cards for everyone.
    pub fn deal_cards(&mut self) -> Result<()> {
        if !self.game_started {
            return Err(TableError::GameNotStarted);
        }

        let cards_per_player = self.config.cards_per_player;
        let cards_per_table = self.config.cards_per_table;

        let players_dealt =
            cards_per_player > 0 && self.players.iter().any(|p| !p.cards().is_empty());
        let board_dealt = cards_per_table > 0 && !self.board.is_empty();
        if players_dealt || board_dealt {
            return Err(TableError::TooManyCards);
        }

        if self.deck.count() < self.players.len() * cards_per_player + cards_per_table {
            return Err(TableError::DeckEmpty);
        }

        for _ in 0..cards_per_player {
            for player in self.players.iter_mut() {
                let card = self.deck.deal().ok_or(TableError::DeckEmpty)?;
                player.receive_card(card);
            }
        }

        for _ in 0..cards_per_table {
            let card = self.deck.deal().ok_or(TableError::DeckEmpty)?;
            self.board.push(card);
        }

        info!(
            "Dealt {} cards to {} players, board {}",
            self.config.cards_per_player,
            self.players.len(),
            Hand::new(&self.board)
        );

        Ok(())
    }

    /// Evaluates the hands of the players that hold all their cards and
    /// returns the winners, players that folded are not evaluated.
    pub fn showdown(&self) -> Result<Showdown> {
        if !self.game_started {
            return Err(TableError::GameNotStarted);
        }

        if self.board.len() != self.config.cards_per_table {
            return Err(TableError::HandNotDealt);
        }

        let hands = self
            .players
            .iter()
            .filter(|p| p.cards().len() == self.config.cards_per_player)
            .map(|p| {
                let mut cards = p.cards().to_vec();
                cards.extend_from_slice(&self.board);

                let hand = Hand::new(&cards);
                let value = Evaluator::new(&hand).hand_value();
                debug!("Player {} hand {hand} value {value}", p.name());

                PlayerHand {
                    name: p.name().to_string(),
                    hand,
                    value,
                }
            })
            .collect::<Vec<_>>();

        if hands.is_empty() {
            return Err(TableError::HandNotDealt);
        }

        let winners = showdown(hands.iter().map(|h| (h.name.clone(), h.value.clone())))
            .into_iter()
            .map(|(name, _)| name)
            .collect::<Vec<_>>();

        info!("Showdown winners {}", winners.join(", "));
        Ok(Showdown { hands, winners })
    }

    /// Takes back all cards and shuffles a new deck.
    pub fn reset_hand(&mut self) {
        for player in self.players.iter_mut() {
            player.return_cards();
        }

        self.board.clear();
        self.deck = Deck::new_and_shuffled(&mut self.rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::AHashSet;

    use crate::Chips;
    use cardroom_eval::HandRank;

    fn new_table(max_players: usize) -> Table {
        let config = TableConfig {
            max_players,
            ..TableConfig::default()
        };
        Table::with_rng(config, StdRng::seed_from_u64(13)).unwrap()
    }

    fn seat_players(table: &mut Table, n: usize) {
        for i in 0..n {
            table.sit_player(Player::new(format!("player{}", i + 1))).unwrap();
        }
    }

    #[test]
    fn config_validation() {
        assert!(TableConfig::default().validate().is_ok());

        let config = TableConfig {
            min_players: 1,
            ..TableConfig::default()
        };
        assert!(matches!(config.validate(), Err(TableError::InvalidConfig(_))));

        let config = TableConfig {
            min_players: 4,
            max_players: 3,
            ..TableConfig::default()
        };
        assert!(matches!(config.validate(), Err(TableError::InvalidConfig(_))));

        let config = TableConfig {
            cards_per_player: 4,
            ..TableConfig::default()
        };
        assert!(matches!(config.validate(), Err(TableError::InvalidConfig(_))));

        let config = TableConfig {
            max_players: 24,
            ..TableConfig::default()
        };
        assert!(matches!(config.validate(), Err(TableError::InvalidConfig(_))));

        // Five cards draw.
        let config = TableConfig {
            max_players: 6,
            cards_per_player: 5,
            cards_per_table: 0,
            ..TableConfig::default()
        };
        assert!(config.validate().is_ok());

        assert!(Table::new(TableConfig::default()).is_ok());
    }

    #[test]
    fn table_sit_and_remove() {
        let mut table = new_table(3);
        assert_eq!(table.table_size(), 3);
        seat_players(&mut table, 3);

        assert_eq!(
            table.sit_player(Player::new("player4")),
            Err(TableError::TableFull { max_players: 3 })
        );

        let player = table.remove_player("player2").unwrap();
        assert_eq!(player.name(), "player2");
        assert_eq!(
            table.remove_player("player2").unwrap_err(),
            TableError::PlayerNotFound("player2".to_string())
        );

        assert_eq!(
            table.sit_player(Player::new("player1")),
            Err(TableError::PlayerAlreadySeated("player1".to_string()))
        );

        table.sit_player(player).unwrap();
        let names = table.players().iter().map(|p| p.name()).collect::<Vec<_>>();
        assert_eq!(names, vec!["player1", "player3", "player2"]);
    }

    #[test]
    fn table_start_game() {
        let mut table = new_table(3);
        assert!(!table.game_started());

        seat_players(&mut table, 1);
        assert_eq!(
            table.start_game(),
            Err(TableError::NotEnoughPlayers {
                seated: 1,
                required: 2
            })
        );
        assert!(!table.game_started());

        table.sit_player(Player::new("player2")).unwrap();
        assert_eq!(table.start_game(), Ok(()));
        assert!(table.game_started());
    }

    #[test]
    fn table_deal_cards() {
        let mut table = new_table(3);
        seat_players(&mut table, 3);
        assert_eq!(table.deal_cards(), Err(TableError::GameNotStarted));

        table.start_game().unwrap();
        table.deal_cards().unwrap();

        for player in table.players() {
            assert_eq!(player.cards().len(), 2);
        }
        assert_eq!(table.board().len(), 5);
        assert_eq!(table.deck().count(), Deck::SIZE - 11);

        // All dealt cards are distinct.
        let mut dealt = table.board().iter().collect::<AHashSet<_>>();
        for player in table.players() {
            dealt.extend(player.cards());
        }
        assert_eq!(dealt.len(), 11);

        // Cards already dealt.
        assert_eq!(table.deal_cards(), Err(TableError::TooManyCards));
        assert_eq!(table.deck().count(), Deck::SIZE - 11);

        table.reset_hand();
        assert!(table.board().is_empty());
        assert_eq!(table.deck().count(), Deck::SIZE);
        table.deal_cards().unwrap();
    }

    #[test]
    fn failed_deal_leaves_table_unchanged() {
        let mut table = new_table(3);
        seat_players(&mut table, 3);
        table.start_game().unwrap();
        table.deal_cards().unwrap();

        // The first player has no cards but the others do.
        table.player_mut("player1").unwrap().fold();
        let board = table.board().to_vec();

        assert_eq!(table.deal_cards(), Err(TableError::TooManyCards));
        assert!(table.player("player1").unwrap().cards().is_empty());
        assert_eq!(table.player("player2").unwrap().cards().len(), 2);
        assert_eq!(table.board(), board.as_slice());
        assert_eq!(table.deck().count(), Deck::SIZE - 11);

        // Board dealt, all players folded.
        table.player_mut("player2").unwrap().fold();
        table.player_mut("player3").unwrap().fold();
        assert_eq!(table.deal_cards(), Err(TableError::TooManyCards));
        assert!(table.players().iter().all(|p| p.cards().is_empty()));
        assert_eq!(table.deck().count(), Deck::SIZE - 11);
    }

    #[test]
    fn table_showdown() {
        let mut table = new_table(4);
        seat_players(&mut table, 4);
        assert!(matches!(table.showdown(), Err(TableError::GameNotStarted)));

        table.start_game().unwrap();
        assert!(matches!(table.showdown(), Err(TableError::HandNotDealt)));

        table.deal_cards().unwrap();
        let showdown = table.showdown().unwrap();
        assert_eq!(showdown.hands.len(), 4);
        assert!(!showdown.winners.is_empty());

        let best = showdown.hands.iter().map(|h| &h.value).max().unwrap();
        for hand in &showdown.hands {
            assert_eq!(hand.hand.len(), 7);
            assert_eq!(&hand.hand.cards()[2..], table.board());
            assert_eq!(showdown.winners.contains(&hand.name), &hand.value == best);
        }
    }

    #[test]
    fn folded_players_lose() {
        let mut table = new_table(3);
        seat_players(&mut table, 3);
        table.start_game().unwrap();
        table.deal_cards().unwrap();

        table.player_mut("player1").unwrap().fold();
        table.player_mut("player2").unwrap().fold();

        let showdown = table.showdown().unwrap();
        assert_eq!(showdown.hands.len(), 1);
        assert_eq!(showdown.winners, vec!["player3".to_string()]);

        table.player_mut("player3").unwrap().fold();
        assert!(matches!(table.showdown(), Err(TableError::HandNotDealt)));
    }

    #[test]
    fn seeded_tables_deal_the_same() {
        let deal = || {
            let mut table = new_table(2);
            seat_players(&mut table, 2);
            table.start_game().unwrap();
            table.deal_cards().unwrap();
            table.board().to_vec()
        };

        assert_eq!(deal(), deal());
    }

    #[test]
    fn five_card_draw_showdown() {
        let config = TableConfig {
            max_players: 6,
            cards_per_player: 5,
            cards_per_table: 0,
            ..TableConfig::default()
        };
        let mut table = Table::with_rng(config, StdRng::seed_from_u64(7)).unwrap();
        seat_players(&mut table, 6);
        table.start_game().unwrap();
        table.deal_cards().unwrap();

        let showdown = table.showdown().unwrap();
        assert_eq!(showdown.hands.len(), 6);
        for hand in &showdown.hands {
            assert_eq!(hand.hand.len(), 5);
            assert!(HandRank::ranks().any(|r| r == hand.value.rank()));
        }
    }

    #[test]
    fn player_chips_at_table() {
        let mut table = new_table(2);
        seat_players(&mut table, 2);

        let player = table.player_mut("player1").unwrap();
        player.add_chips(Chips::new(1_000)).unwrap();
        player.bet(Chips::new(200)).unwrap();
        assert_eq!(table.player("player1").unwrap().chips(), Chips::new(800));
        assert!(table.player("nobody").is_none());
    }
}
