//! Shared deck-list fixtures for the integration tests

#![allow(dead_code)]

/// A legal 60-card Expanded list in PTCGL export format
pub const SIXTY_CARD_LIST: &str = "Pokémon: 16
4 Arceus V BRS 122
3 Arceus VSTAR BRS 123
2 Giratina V LOR 130
2 Giratina VSTAR LOR 131
1 Bibarel BRS 121
2 Bidoof CRZ 111
2 Skwovet SSH 151

Trainer: 34
4 Ultra Ball SVI 196
4 Nest Ball SVI 181
4 Professor's Research PR-SV 190
3 Iono PAL 185
2 Boss's Orders PAL 172
4 Trainers' Mail ROS 92
1 Guzma & Hala CEC 193
4 Switch Cart ASR 154
4 Battle VIP Pass FST 225
4 Path to the Peak CRE 148

Energy: 10
4 Double Turbo Energy BRS 151
6 Psychic Energy SVE 5

Total Cards: 60
";

/// Wrap card lines in a single section header
pub fn section(header: &str, lines: &[&str]) -> String {
    let mut text = format!("{}\n", header);
    for line in lines {
        text.push_str(line);
        text.push('\n');
    }
    text
}
