/*
  Fiddler, a UCI-compatible chess engine.
  Copyright (C) 2022 The Fiddler Authors (see AUTHORS.md file)

  Fiddler is free software: you can redistribute it and/or modify
  it under the terms of the GNU General Public License as published by
  the Free Software Foundation, either version 3 of the License, or
  (at your option) any later version.

  Fiddler is distributed in the hope that it will be useful,
  but WITHOUT ANY WARRANTY; without even the implied warranty of
  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
  GNU General Public License for more details.

  You should have received a copy of the GNU General Public License
  along with this program.  If not, see <http://www.gnu.org/licenses/>.
*/

//! Saved magic constants.
//!
//! Each fancy magic is only collision-free together with the bit count it was found for, so
//! [`SAVED_ROOK_MAGICS`] must always be paired with [`ROOK_BITS`] and [`SAVED_BISHOP_MAGICS`] with
//! [`BISHOP_BITS`]. Black magics always use [`Slider::black_magic_bits`](crate::Slider).

/// A saved list of fancy magics for rooks created using the generator.
///
/// Some magics for sizes below the required bitshift amount were taken from the Chess Programming
/// Wiki.
pub const SAVED_ROOK_MAGICS: [u64; 64] = [
    0x4080_0020_4000_1480, // a1
    0x0040_0010_0140_2000, // b1
    0x0300_2000_1810_4100, // c1
    0x2100_0409_0110_0120, // d1
    0x8a00_0600_0408_2070, // e1
    0x0080_0144_0002_0080, // f1
    0x1100_2500_208a_0004, // g1
    0x0900_0042_2201_8100, // h1
    0x0208_8002_28c0_0081, // a2
    0x2280_4010_0340_2000, // b2
    0x0008_8010_0020_0184, // c2
    0x0001_0020_1000_0900, // d2
    0x0182_0006_0010_6008, // e2
    0x2058_8004_0080_0200, // f2
    0x0004_8002_0080_0900, // g2
    0x052d_0012_0040_a100, // h2
    0x0540_0880_0080_24c1, // a3
    0x2000_8480_4002_2000, // b3
    0x0400_4100_1100_6000, // c3
    0x0040_a100_3001_0108, // d3
    0x1204_8080_0800_0402, // e3
    0x0802_8080_0400_2201, // f3
    0x1002_8080_5200_0500, // g3
    0x0004_0a00_2112_4184, // h3
    0x0640_0128_8008_8040, // a4
    0x8410_4000_8020_008a, // b4
    0x0400_2008_8010_0080, // c4
    0x2001_0121_0009_1004, // d4
    0x1200_0d01_0008_0010, // e4
    0x6004_0004_0120_1008, // f4
    0x7500_aa04_0008_4110, // g4
    0x0100_0052_0004_0981, // h4
    0x0040_8040_0280_0020, // a5
    0x0470_0020_0640_0240, // b5
    0x0001_2000_8080_1000, // c5
    0x0000_0812_0200_2040, // d5
    0x00c0_8044_0080_0800, // e5
    0x9000_800a_0080_0400, // f5
    0x0001_0004_0100_0600, // g5
    0x0042_1088_ca00_2401, // h5
    0x0000_c000_228d_8000, // a6
    0x6410_0420_1440_4001, // b6
    0x1002_0040_8226_0014, // c6
    0x206a_0088_11c2_0021, // d6
    0x0002_0018_1022_0024, // e6
    0x2001_0200_0400_8080, // f6
    0x1000_0801_100c_001a, // g6
    0x0048_0082_5402_0011, // h6
    0x48ff_fe99_fecf_aa00, // a7, found by Grant Osborne
    0x48ff_fe99_fecf_aa00, // b7, found by Grant Osborne
    0x497f_ffad_ff9c_2e00, // c7, found by Grant Osborne
    0x613f_ffdd_ffce_9200, // d7, found by Grant Osborne
    0xffff_ffe9_ffe7_ce00, // e7, found by Volker Annuss
    0xffff_fff5_fff3_e600, // f7, found by Volker Annuss
    0x0003_ff95_e5e6_a4c0, // g7, found by Niklas Fiekas
    0x510f_fff5_f63c_96a0, // h7, found by Grant Osborne
    0xebff_ffb9_ff9f_c526, // a8, found by Grant Osborne
    0x61ff_fedd_feed_aeae, // b8, found by Grant Osborne
    0x53bf_ffed_ffde_b1a2, // c8, found by Grant Osborne
    0x127f_ffb9_ffdf_b5f6, // d8, found by Grant Osborne
    0x411f_ffdd_ffdb_f4d6, // e8, found by Grant Osborne
    0x0822_0024_0810_4502, // f8
    0x0003_ffef_27ee_be74, // g8, found by Peter Österlund
    0x7645_fffe_cbfe_a79e, // h8, found by Grant Osborne
];

/// A saved list of fancy magics for bishops created using the generator.
///
/// Some magics for sizes below the required bitshift amount were taken from the Chess Programming
/// Wiki.
pub const SAVED_BISHOP_MAGICS: [u64; 64] = [
    0xffed_f9fd_7cfc_ffff, // a1, found by Gerd Isenberg
    0xfc09_6285_4a77_f576, // b1, found by Gerd Isenberg
    0x0012_2808_c102_a004, // c1
    0x2851_2400_8240_0440, // d1
    0x0011_1040_1100_0202, // e1
    0x0008_2208_2000_0010, // f1
    0xfc0a_66c6_4a7e_f576, // g1, found by Gerd Isenberg
    0x7ffd_fdfc_bd79_ffff, // h1, found by Gerd Isenberg
    0xfc08_46a6_4a34_fff6, // a2, found by Gerd Isenberg
    0xfc08_7a87_4a3c_f7f6, // b2, found by Gerd Isenberg
    0x0009_8802_0420_a000, // c2
    0x8000_4404_0080_8200, // d2
    0x208c_8450_c001_3407, // e2
    0x1980_1105_2010_8030, // f2
    0xfc08_64ae_59b4_ff76, // g2, found by Gerd Isenberg
    0x3c08_60af_4b35_ff76, // h2, found by Gerd Isenberg
    0x73c0_1af5_6cf4_cffb, // a3, found by Richard Pijl
    0x41a0_1cfa_d64a_affc, // b3, found by Richard Pijl
    0x0604_0002_04a2_0202, // c3
    0x0002_8208_0602_4000, // d3
    0x008a_0024_2201_0201, // e3
    0x2082_0040_8801_0802, // f3
    0x7c0c_028f_5b34_ff76, // g3, found by Gerd Isenberg
    0xfc0a_028e_5ab4_df76, // h3, found by Gerd Isenberg
    0x0810_0420_d104_1080, // a4
    0x0904_5100_0210_0100, // b4
    0x0202_2808_0406_4403, // c4
    0x004c_0040_0c03_0082, // d4
    0x0602_0010_0200_5011, // e4
    0x7209_0200_c108_9000, // f4
    0x4211_4104_2400_8805, // g4
    0x0002_8484_2126_0804, // h4
    0xc001_0412_1121_2004, // a5
    0x0208_0188_0004_4800, // b5
    0x0080_2064_1058_0800, // c5
    0x0000_2011_0008_0084, // d5
    0x0208_0034_0009_4100, // e5
    0x2190_4102_0000_4058, // f5
    0x0188_8214_0180_8080, // g5
    0x2006_0a02_0000_c4c0, // h5
    0xdcef_d9b5_4bfc_c09f, // a6, found by Richard Pijl
    0xf95f_fa76_5afd_602b, // b6, found by Richard Pijl
    0x200a_1041_1000_2040, // c6
    0x0800_000c_0831_0c00, // d6
    0x0218_0401_0a01_0400, // e6
    0x1092_2004_0022_4100, // f6
    0x43ff_9a5c_f4ca_0c01, // g6, found by Gerd Isenberg
    0x4bff_cd8e_7c58_7601, // h6, found by Richard Pijl
    0xfc0f_f286_5334_f576, // a7, found by Gerd Isenberg
    0xfc0b_f6ce_5924_f576, // b7, found by Gerd Isenberg
    0x8052_2060_8c30_0001, // c7
    0x2084_1050_4202_0400, // d7
    0xe018_8010_2206_0220, // e7
    0x0001_1220_4901_0200, // f7
    0xc3ff_b7dc_36ca_8c89, // g7, found by Gerd Isenberg
    0xc3ff_8a54_f4ca_2c89, // h7, found by Gerd Isenberg
    0xffff_fcfc_fd79_edff, // a8, found by Gerd Isenberg
    0xfc08_63fc_cb14_7576, // b8, found by Gerd Isenberg
    0x40a0_0400_6213_3000, // c8
    0x0142_0280_0084_0400, // d8
    0x0009_0900_1006_1200, // e8
    0x0800_8445_2810_0308, // f8
    0xfc08_7e8e_4bb2_f736, // g8, found by Gerd Isenberg
    0x43ff_9e4e_f4ca_2c89, // h8, found by Gerd Isenberg
];

/// The number of bits used to express the fancy magic lookups for rooks at each square.
///
/// Where a square has fewer bits than its mask has squares, its magic relies on occupancies with
/// equal attacks sharing a key.
#[rustfmt::skip]
pub const ROOK_BITS: [u8; 64] = [
    12, 11, 11, 11, 11, 11, 11, 12, // rank 1
    11, 10, 10, 10, 10, 10, 10, 11, // 2
    11, 10, 10, 10, 10, 10, 10, 11, // 3
    11, 10, 10, 10, 10, 10, 10, 11, // 4
    11, 10, 10, 10, 10, 10, 10, 11, // 5
    11, 10, 10, 10, 10, 10, 10, 11, // 6
    10, 9, 9, 9, 9, 9, 9, 10, // 7
    11, 10, 10, 10, 10, 11, 10, 11, // 8
];

/// The number of bits used to express the fancy magic lookups for bishops at each square.
#[rustfmt::skip]
pub const BISHOP_BITS: [u8; 64] = [
    5, 4, 5, 5, 5, 5, 4, 5, // rank 1
    4, 4, 5, 5, 5, 5, 4, 4, // 2
    4, 4, 7, 7, 7, 7, 4, 4, // 3
    5, 5, 7, 9, 9, 7, 5, 5, // 4
    5, 5, 7, 9, 9, 7, 5, 5, // 5
    4, 4, 7, 7, 7, 7, 4, 4, // 6
    4, 4, 5, 5, 5, 5, 4, 4, // 7
    5, 4, 5, 5, 5, 5, 4, 5, // 8
];

/// Black magics for rooks, found by Niklas Fiekas and Volker Annuss.
pub const BLACK_ROOK_MAGICS: [u64; 64] = [
    0x8028_0013_ff84_ffff, // a1
    0x5ffb_fefd_fef6_7fff, // b1
    0xffef_faff_effd_ffff, // c1
    0x0030_0090_0300_008a, // d1
    0x0050_0280_1050_0023, // e1
    0x0020_0121_20a0_0020, // f1
    0x0030_0060_00c0_0030, // g1
    0x0058_0058_06b0_0002, // h1
    0x7fbf_f7fb_fbea_fffc, // a2
    0x0000_1400_8105_0002, // b2
    0x0000_1800_4380_0048, // c2
    0x7fff_e800_021f_ffb8, // d2
    0xffff_cffe_7fcf_ffaf, // e2
    0x0000_1800_c018_0060, // f2
    0x4f80_1800_5fd0_0018, // g2
    0x0000_1800_3062_0018, // h2
    0x0030_0018_010c_0003, // a3
    0x0003_000c_0085_ffff, // b3
    0xfffd_fff7_fbfe_fff7, // c3
    0x7fc1_ffdf_fc00_1fff, // d3
    0xfffe_ffdf_fdff_dfff, // e3
    0x7c10_8007_beff_f81f, // f3
    0x2040_8007_bfe0_0810, // g3
    0x0400_8005_5860_4100, // h3
    0x0040_2000_1008_0008, // a4
    0x0010_0200_0804_0004, // b4
    0xfffd_feff_f7fb_fff7, // c4
    0xfebf_7dff_f8fe_fff9, // d4
    0xc000_00ff_e001_ffe0, // e4
    0x4af0_1f00_0780_07c3, // f4
    0xbffb_faff_fb68_3f7f, // g4
    0x0807_f67f_fa10_2040, // h4
    0x2000_08e8_0030_0030, // a5
    0x0000_0087_8018_0018, // b5
    0x0000_0103_0018_0018, // c5
    0x4000_0081_8018_0018, // d5
    0x0080_8031_0005_fffa, // e5
    0x4000_1881_0006_0006, // f5
    0xffff_ff7f_ffbf_bfff, // g5
    0x0000_8020_0020_0040, // h5
    0x2000_0202_ec00_2800, // a6
    0xffff_f9ff_7cff_f3ff, // b6
    0x0000_0040_4b80_1800, // c6
    0x2000_002f_e03f_d000, // d6
    0xffff_ff6f_fe7f_cffd, // e6
    0xbff7_efff_bfc0_0fff, // f6
    0x0000_0010_0800_a804, // g6
    0x6054_000a_5800_5805, // h6
    0x0829_0001_0115_0028, // a7
    0x0000_0085_008a_0014, // b7
    0x8000_002b_0040_8028, // c7
    0x4000_0020_4079_0028, // d7
    0x7800_0020_1028_8028, // e7
    0x0000_0018_00e0_8018, // f7
    0xa3a8_0003_f3a4_0048, // g7
    0x2003_d800_0050_0028, // h7
    0xffff_f37e_efef_dfbe, // a8
    0x4000_0280_0900_13c1, // b8
    0xbf7f_feff_bffa_f71f, // c8
    0xfffd_ffff_777b_7d6e, // d8
    0x4830_0007_e808_0c02, // e8
    0xafe0_000f_ff78_0402, // f8
    0xee73_fffb_ffbb_77fe, // g8
    0x0002_0003_0848_2882, // h8
];

/// Black magics for bishops, found by Niklas Fiekas and Volker Annuss.
pub const BLACK_BISHOP_MAGICS: [u64; 64] = [
    0xa702_0080_6018_03d8, // a1
    0x1380_2040_4008_01f1, // b1
    0x0a00_8018_1001_f60c, // c1
    0x1840_8020_0423_8008, // d1
    0xc03f_e001_0000_0000, // e1
    0x24c0_0bff_ff40_0000, // f1
    0x0808_101f_4000_7f04, // g1
    0x1008_0820_1ec0_0080, // h1
    0xffa2_feff_bfef_b7ff, // a2
    0x083e_3ee0_4008_0801, // b2
    0xc080_0080_1810_01f8, // c2
    0x0440_007f_e003_1000, // d2
    0x2010_007f_fc00_0000, // e2
    0x1079_ffe0_00ff_8000, // f2
    0x3c07_0810_1f40_0080, // g2
    0x0806_1408_0fa0_0040, // h2
    0x7ffe_7fff_817f_cff9, // a3
    0x7ffe_bfff_a010_27fd, // b3
    0x5301_8080_c00f_4001, // c3
    0x407e_0001_000f_fb8a, // d3
    0x201f_e000_fff8_0010, // e3
    0xffdf_efff_de39_ffef, // f3
    0xcc88_0800_0fbf_8002, // g3
    0x7ff7_fbff_f820_3fff, // h3
    0x8800_013e_8300_c030, // a4
    0x0420_0097_0180_6018, // b4
    0x7ffe_ff7f_7f01_f7fd, // c4
    0x8700_3030_10c0_c006, // d4
    0xc800_1818_1060_6000, // e4
    0x2000_2038_001c_8010, // f4
    0x087f_f038_000f_c001, // g4
    0x0008_0c0c_0008_3007, // h4
    0x0000_0080_fc82_c040, // a5
    0x0000_0040_7e41_6020, // b5
    0x0060_0203_f800_8020, // c5
    0xd003_fefe_0440_4080, // d5
    0xa000_20c0_1800_3088, // e5
    0x7fbf_fe70_0bff_e800, // f5
    0x107f_f00f_e400_0f90, // g5
    0x7f8f_ffcf_f1d0_07f8, // h5
    0x0000_0041_00f8_8080, // a6
    0x0000_0020_807c_4040, // b6
    0x0000_0041_0187_00c0, // c6
    0x0010_0000_80fc_4080, // d6
    0x1000_003c_8018_0030, // e6
    0xc100_00df_8028_0050, // f6
    0xffff_ffbf_eff8_0fdc, // g6
    0x0000_0010_1003_f812, // h6
    0x0800_001f_4080_8200, // a7
    0x0840_0010_1f3f_d208, // b7
    0x0800_0000_0f80_8081, // c7
    0x0004_0000_0800_3f80, // d7
    0x0800_0001_001f_e040, // e7
    0x72dd_0000_4090_0a00, // f7
    0xffff_feff_bfef_f81d, // g7
    0xcd80_0020_0feb_f209, // h7
    0x1000_0010_1ec1_0082, // a8
    0x7fba_ffff_efe0_c02f, // b8
    0x7f83_ffff_fff0_7f7f, // c8
    0xfff1_ffff_fff7_ffc1, // d8
    0x0878_0400_00ff_e01f, // e8
    0x945e_3880_0080_1012, // f8
    0x0840_8000_8020_0fda, // g8
    0x1000_00c0_5f58_2008, // h8
];
