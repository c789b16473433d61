//! End-to-end generation against the bundled reference table.

use clap::Parser;
use mkmonster::{Cli, generate};
use monster_content::TablesLoader;
use monster_core::{Monster, ReferenceTable, TableError};

fn table() -> ReferenceTable {
    TablesLoader::bundled().expect("bundled table should parse")
}

fn cli(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("mkmonster").chain(args.iter().copied()))
        .expect("arguments should parse")
}

#[test]
fn legendary_party_with_coordinated_boosts() {
    let table = table();
    let profile = table.find_by_name("Legendary").unwrap();
    let cli = cli(&["Legendary", "4", "-g", "atk", "-g", "dc", "--apr", "2"]);

    let monster = cli.builder(&table).build().unwrap();
    assert_eq!(monster.dmg(), profile.dmg.party.average.div_euclid(2));
    assert_eq!(monster.ac(), profile.ac.average);
    assert_eq!(monster.hp(), profile.hp.party.average);
    assert_eq!(monster.atk(), profile.atk.good);
    assert_eq!(monster.dc(), profile.dc.good);
    assert_eq!(monster.threat().score, 1);
    assert_eq!(monster.threat().level.to_string(), "Medium");

    let expected = concat!(
        " Legendary (17-20) \n",
        "    Party (3-5)    \n",
        " Medium threat (1) \n",
        "━━━━━━━━━┯━━━━━━━━━\n",
        "Prof: +7 │ DC:   22\n",
        "AC:   19 │ HP:  105\n",
        "Atk: +14 │ Dmg:  11\n",
    );
    assert_eq!(generate(&cli, &table).unwrap(), expected);
}

#[test]
fn resilient_area_attacker() {
    let table = table();
    let profile = table.find_by_level(7).unwrap();
    let cli = cli(&["7", "gang", "Bandits", "--apr", "area", "--resist", "-p", "ac"]);

    let monster = cli.builder(&table).build().unwrap();
    assert_eq!(monster.hp(), profile.hp.gang.average.div_euclid(2));
    assert_eq!(monster.dmg(), profile.dmg.gang.average.div_euclid(2));
    assert_eq!(monster.ac(), profile.ac.poor);
    assert_eq!(monster.name(), Some("Bandits"));

    let block = generate(&cli, &table).unwrap();
    assert!(block.starts_with("      Bandits      \n"));
    assert!(block.contains("    Gang (7-10)    \n"));
    assert!(block.contains("Medium threat (-1)"));
}

#[test]
fn damage_over_time_keeps_full_damage() {
    let table = table();
    let profile = table.find_by_name("novice").unwrap();
    let monster = cli(&["novice", "solo", "--apr", "dot"])
        .builder(&table)
        .build()
        .unwrap();
    assert_eq!(monster.dmg(), profile.dmg.solo.average);
}

#[test]
fn unknown_stats_are_silently_ignored() {
    let table = table();
    let plain = generate(&cli(&["3", "2"]), &table).unwrap();
    let noisy = generate(&cli(&["3", "2", "-g", "str", "-p", "wis"]), &table).unwrap();
    assert_eq!(plain, noisy);
}

#[test]
fn unknown_tier_is_an_error() {
    let table = table();
    let err = generate(&cli(&["Mythic", "1"]), &table).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<TableError>(),
        Some(TableError::UnknownTier { .. })
    ));
    assert!(err.to_string().contains("Novice, Veteran, Heroic, Legendary"));
}

#[test]
fn level_out_of_range_is_an_error() {
    let table = table();
    let err = generate(&cli(&["25", "1"]), &table).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<TableError>(),
        Some(TableError::LevelOutOfRange { level: 25, .. })
    ));
}

#[test]
fn zero_count_uses_the_degenerate_band() {
    let table = table();
    let monster = cli(&["1", "0"]).builder(&table).build().unwrap();
    assert_eq!(monster.hp(), 1);
    assert_eq!(monster.dmg(), 1);
    assert!(generate(&cli(&["1", "0"]), &table)
        .unwrap()
        .contains("Uncountable (0)"));
}

#[test]
fn table_path_can_come_from_the_command_line() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("custom.json");
    std::fs::write(&path, monster_content::BUNDLED_TABLE).unwrap();

    let cli = cli(&["heroic", "mob", "--table", path.to_str().unwrap()]);
    let config = mkmonster::GeneratorConfig::default().with_table(cli.table.clone());
    let table = TablesLoader::load(&config.table_path).unwrap();

    let block = generate(&cli, &table).unwrap();
    assert!(block.contains("Heroic (11-16)"));
    assert!(block.contains("Mob (11-20)"));
}
