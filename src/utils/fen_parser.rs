//! FEN-to-Position parser.
//!
//! Rejects anything that would break the board invariants: overlapping or
//! misplaced pieces, a missing or extra king, an en-passant square off the
//! third or sixth rank.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::*;
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_fen(fen: &str) -> ChessResult<Position> {
    let mut parts = fen.split_whitespace();
    let mut field = |name: &'static str| parts.next().ok_or(ChessError::FenMissingField(name));

    let board_part = field("board")?;
    let side_part = field("side-to-move")?;
    let castling_part = field("castling")?;
    let en_passant_part = field("en-passant")?;
    let halfmove_part = field("halfmove clock")?;
    let fullmove_part = field("fullmove number")?;

    if parts.next().is_some() {
        return Err(ChessError::FenExtraFields);
    }

    let mut position = Position::new_empty();
    position.pieces = parse_board(board_part)?;
    position.side_to_move = parse_side_to_move(side_part)?;
    position.castling_rights = parse_castling_rights(castling_part)?;
    position.en_passant = parse_en_passant(en_passant_part)?;
    position.halfmove_clock = parse_counter(halfmove_part)?;
    position.fullmove_number = parse_counter(fullmove_part)?;

    for color in Color::BOTH {
        let count = position.pieces_of(color, PieceKind::King).count_ones();
        if count != 1 {
            return Err(ChessError::FenKingCount { color, count });
        }
    }

    Ok(position)
}

fn parse_board(board_part: &str) -> ChessResult<[[Bitboard; 6]; 2]> {
    let invalid = |reason: &str| ChessError::FenInvalidBoard(reason.to_owned());

    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(invalid("board layout must contain 8 ranks"));
    }

    let mut pieces = [[0u64; 6]; 2];
    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let board_rank = 7 - fen_rank_idx as u8;
        let mut file = 0u8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(invalid(&format!("invalid empty-square count '{ch}'")));
                }
                file += empty_count as u8;
                if file > 8 {
                    return Err(invalid(&format!("rank {} has too many files", board_rank + 1)));
                }
                continue;
            }

            let (color, kind) = piece_from_fen_char(ch)
                .ok_or_else(|| invalid(&format!("invalid piece character '{ch}'")))?;
            if file >= 8 {
                return Err(invalid(&format!("rank {} has too many files", board_rank + 1)));
            }
            pieces[color.index()][kind.index()] |= square_bit(square_of(board_rank, file));
            file += 1;
        }

        if file != 8 {
            return Err(invalid(&format!("rank {} does not sum to 8 files", board_rank + 1)));
        }
    }

    Ok(pieces)
}

fn parse_side_to_move(side_part: &str) -> ChessResult<Color> {
    match side_part {
        "w" => Ok(Color::Light),
        "b" => Ok(Color::Dark),
        _ => Err(ChessError::FenInvalidSideToMove(side_part.to_owned())),
    }
}

fn parse_castling_rights(castling_part: &str) -> ChessResult<CastlingRights> {
    if castling_part == "-" {
        return Ok(0);
    }

    castling_part.chars().try_fold(0, |rights, ch| {
        let right = match ch {
            'K' => CASTLE_LIGHT_KINGSIDE,
            'Q' => CASTLE_LIGHT_QUEENSIDE,
            'k' => CASTLE_DARK_KINGSIDE,
            'q' => CASTLE_DARK_QUEENSIDE,
            _ => return Err(ChessError::FenInvalidCastling(ch)),
        };
        Ok(rights | right)
    })
}

fn parse_en_passant(en_passant_part: &str) -> ChessResult<Bitboard> {
    if en_passant_part == "-" {
        return Ok(0);
    }

    let square = algebraic_to_square(en_passant_part)
        .map_err(|_| ChessError::FenInvalidEnPassant(en_passant_part.to_owned()))?;
    if !matches!(rank_of(square), 2 | 5) {
        return Err(ChessError::FenInvalidEnPassant(en_passant_part.to_owned()));
    }
    Ok(square_bit(square))
}

fn parse_counter(text: &str) -> ChessResult<u16> {
    text.parse::<u16>()
        .map_err(|_| ChessError::FenInvalidCounter(text.to_owned()))
}

fn piece_from_fen_char(ch: char) -> Option<(Color, PieceKind)> {
    let color = if ch.is_ascii_uppercase() {
        Color::Light
    } else if ch.is_ascii_lowercase() {
        Color::Dark
    } else {
        return None;
    };
    PieceKind::from_char(ch).map(|kind| (color, kind))
}

#[cfg(test)]
mod tests {
    use super::parse_fen;
    use crate::errors::ChessError;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::*;

    #[test]
    fn parse_starting_fen() {
        let position = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");
        assert_eq!(position, Position::new_game());
        assert_eq!(position.side_to_move, Color::Light);
        assert_eq!(position.fullmove_number, 1);
        assert_eq!(position.halfmove_clock, 0);
    }

    #[test]
    fn parses_en_passant_and_counters() {
        let position = parse_fen("rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR w KQkq e6 0 2")
            .expect("valid FEN");
        assert_eq!(position.en_passant_square(), Some(44));
        assert_eq!(position.fullmove_number, 2);

        let zero_move = parse_fen("4k3/8/8/8/8/8/8/4K3 w - - 7 0").expect("zero fullmove is accepted");
        assert_eq!(zero_move.fullmove_number, 0);
        assert_eq!(zero_move.halfmove_clock, 7);
    }

    #[test]
    fn rejects_structural_errors() {
        assert_eq!(
            parse_fen("4k3/8/8/8/8/8/8/4K3 w -"),
            Err(ChessError::FenMissingField("en-passant"))
        );
        assert_eq!(
            parse_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1 extra"),
            Err(ChessError::FenExtraFields)
        );
        assert!(matches!(
            parse_fen("4k3/8/8/8/8/8/4K3 w - - 0 1"),
            Err(ChessError::FenInvalidBoard(_))
        ));
        assert!(matches!(
            parse_fen("4k3/8/8/8/8/8/8/4K4 w - - 0 1"),
            Err(ChessError::FenInvalidBoard(_))
        ));
        assert!(matches!(
            parse_fen("4k3/8/8/8/8/8/8/4X3 w - - 0 1"),
            Err(ChessError::FenInvalidBoard(_))
        ));
        assert!(matches!(
            parse_fen("4k3/8/8/8/8/8/8/4K2 w - - 0 1"),
            Err(ChessError::FenInvalidBoard(_))
        ));
    }

    #[test]
    fn requires_one_king_each() {
        assert_eq!(
            parse_fen("4k3/8/8/8/8/8/8/8 w - - 0 1"),
            Err(ChessError::FenKingCount {
                color: Color::Light,
                count: 0
            })
        );
        assert_eq!(
            parse_fen("4k2k/8/8/8/8/8/8/4K3 w - - 0 1"),
            Err(ChessError::FenKingCount {
                color: Color::Dark,
                count: 2
            })
        );
    }

    #[test]
    fn rejects_bad_fields() {
        assert_eq!(
            parse_fen("4k3/8/8/8/8/8/8/4K3 x - - 0 1"),
            Err(ChessError::FenInvalidSideToMove("x".to_owned()))
        );
        assert_eq!(
            parse_fen("4k3/8/8/8/8/8/8/4K3 w KX - 0 1"),
            Err(ChessError::FenInvalidCastling('X'))
        );
        assert_eq!(
            parse_fen("4k3/8/8/8/8/8/8/4K3 w - e4 0 1"),
            Err(ChessError::FenInvalidEnPassant("e4".to_owned()))
        );
        assert_eq!(
            parse_fen("4k3/8/8/8/8/8/8/4K3 w - - -1 1"),
            Err(ChessError::FenInvalidCounter("-1".to_owned()))
        );
    }
}
