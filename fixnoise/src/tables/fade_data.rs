//! Generated by `fixnoise tables --table fade --format array`.
//!
//! Sample `i` packs `round(4096 * fade(i / 256))` into the high 16 bits and
//! `round(4096 * fade((i + 1) / 256))` into the low 16 bits. Do not edit manually.

/// Packed fade curve segments, indexed by the top 8 bits of a Q16.16 fraction.
pub const FADE_TABLE: [u32; 256] = [
    0x0000_0000, 0x0000_0000, 0x0000_0000, 0x0000_0000, 0x0000_0000, 0x0000_0001,
    0x0001_0001, 0x0001_0001, 0x0001_0002, 0x0002_0002, 0x0002_0003, 0x0003_0004,
    0x0004_0005, 0x0005_0006, 0x0006_0008, 0x0008_0009, 0x0009_000B, 0x000B_000D,
    0x000D_000F, 0x000F_0011, 0x0011_0014, 0x0014_0017, 0x0017_001A, 0x001A_001D,
    0x001D_0021, 0x0021_0025, 0x0025_0029, 0x0029_002D, 0x002D_0032, 0x0032_0037,
    0x0037_003C, 0x003C_0042, 0x0042_0048, 0x0048_004E, 0x004E_0054, 0x0054_005B,
    0x005B_0062, 0x0062_006A, 0x006A_0072, 0x0072_007A, 0x007A_0082, 0x0082_008B,
    0x008B_0094, 0x0094_009E, 0x009E_00A8, 0x00A8_00B2, 0x00B2_00BD, 0x00BD_00C8,
    0x00C8_00D3, 0x00D3_00DF, 0x00DF_00EB, 0x00EB_00F7, 0x00F7_0104, 0x0104_0111,
    0x0111_011F, 0x011F_012C, 0x012C_013B, 0x013B_0149, 0x0149_0158, 0x0158_0167,
    0x0167_0177, 0x0177_0187, 0x0187_0197, 0x0197_01A8, 0x01A8_01B9, 0x01B9_01CA,
    0x01CA_01DC, 0x01DC_01EE, 0x01EE_0201, 0x0201_0214, 0x0214_0227, 0x0227_023A,
    0x023A_024E, 0x024E_0262, 0x0262_0276, 0x0276_028B, 0x028B_02A0, 0x02A0_02B6,
    0x02B6_02CB, 0x02CB_02E1, 0x02E1_02F8, 0x02F8_030E, 0x030E_0325, 0x0325_033C,
    0x033C_0354, 0x0354_036C, 0x036C_0384, 0x0384_039C, 0x039C_03B4, 0x03B4_03CD,
    0x03CD_03E6, 0x03E6_0400, 0x0400_0419, 0x0419_0433, 0x0433_044D, 0x044D_0467,
    0x0467_0482, 0x0482_049C, 0x049C_04B7, 0x04B7_04D2, 0x04D2_04EE, 0x04EE_0509,
    0x0509_0525, 0x0525_0541, 0x0541_055D, 0x055D_0579, 0x0579_0595, 0x0595_05B2,
    0x05B2_05CE, 0x05CE_05EB, 0x05EB_0608, 0x0608_0625, 0x0625_0642, 0x0642_065F,
    0x065F_067D, 0x067D_069A, 0x069A_06B8, 0x06B8_06D5, 0x06D5_06F3, 0x06F3_0711,
    0x0711_072E, 0x072E_074C, 0x074C_076A, 0x076A_0788, 0x0788_07A6, 0x07A6_07C4,
    0x07C4_07E2, 0x07E2_0800, 0x0800_081E, 0x081E_083C, 0x083C_085A, 0x085A_0878,
    0x0878_0896, 0x0896_08B4, 0x08B4_08D2, 0x08D2_08EF, 0x08EF_090D, 0x090D_092B,
    0x092B_0948, 0x0948_0966, 0x0966_0983, 0x0983_09A1, 0x09A1_09BE, 0x09BE_09DB,
    0x09DB_09F8, 0x09F8_0A15, 0x0A15_0A32, 0x0A32_0A4E, 0x0A4E_0A6B, 0x0A6B_0A87,
    0x0A87_0AA3, 0x0AA3_0ABF, 0x0ABF_0ADB, 0x0ADB_0AF7, 0x0AF7_0B12, 0x0B12_0B2E,
    0x0B2E_0B49, 0x0B49_0B64, 0x0B64_0B7E, 0x0B7E_0B99, 0x0B99_0BB3, 0x0BB3_0BCD,
    0x0BCD_0BE7, 0x0BE7_0C00, 0x0C00_0C1A, 0x0C1A_0C33, 0x0C33_0C4C, 0x0C4C_0C64,
    0x0C64_0C7C, 0x0C7C_0C94, 0x0C94_0CAC, 0x0CAC_0CC4, 0x0CC4_0CDB, 0x0CDB_0CF2,
    0x0CF2_0D08, 0x0D08_0D1F, 0x0D1F_0D35, 0x0D35_0D4A, 0x0D4A_0D60, 0x0D60_0D75,
    0x0D75_0D8A, 0x0D8A_0D9E, 0x0D9E_0DB2, 0x0DB2_0DC6, 0x0DC6_0DD9, 0x0DD9_0DEC,
    0x0DEC_0DFF, 0x0DFF_0E12, 0x0E12_0E24, 0x0E24_0E36, 0x0E36_0E47, 0x0E47_0E58,
    0x0E58_0E69, 0x0E69_0E79, 0x0E79_0E89, 0x0E89_0E99, 0x0E99_0EA8, 0x0EA8_0EB7,
    0x0EB7_0EC5, 0x0EC5_0ED4, 0x0ED4_0EE1, 0x0EE1_0EEF, 0x0EEF_0EFC, 0x0EFC_0F09,
    0x0F09_0F15, 0x0F15_0F21, 0x0F21_0F2D, 0x0F2D_0F38, 0x0F38_0F43, 0x0F43_0F4E,
    0x0F4E_0F58, 0x0F58_0F62, 0x0F62_0F6C, 0x0F6C_0F75, 0x0F75_0F7E, 0x0F7E_0F86,
    0x0F86_0F8E, 0x0F8E_0F96, 0x0F96_0F9E, 0x0F9E_0FA5, 0x0FA5_0FAC, 0x0FAC_0FB2,
    0x0FB2_0FB8, 0x0FB8_0FBE, 0x0FBE_0FC4, 0x0FC4_0FC9, 0x0FC9_0FCE, 0x0FCE_0FD3,
    0x0FD3_0FD7, 0x0FD7_0FDB, 0x0FDB_0FDF, 0x0FDF_0FE3, 0x0FE3_0FE6, 0x0FE6_0FE9,
    0x0FE9_0FEC, 0x0FEC_0FEF, 0x0FEF_0FF1, 0x0FF1_0FF3, 0x0FF3_0FF5, 0x0FF5_0FF7,
    0x0FF7_0FF8, 0x0FF8_0FFA, 0x0FFA_0FFB, 0x0FFB_0FFC, 0x0FFC_0FFD, 0x0FFD_0FFE,
    0x0FFE_0FFE, 0x0FFE_0FFF, 0x0FFF_0FFF, 0x0FFF_0FFF, 0x0FFF_1000, 0x1000_1000,
    0x1000_1000, 0x1000_1000, 0x1000_1000, 0x1000_1000,
];
