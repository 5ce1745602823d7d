//! FPGA device identifiers and match masks
//!
//! Identifier values are JTAG IDCODEs (see [`crate::idcode`]). Xilinx parts
//! are listed with the version nibble cleared and matched with
//! [`FPGA_ID_MASK_NOVER`], so every stepping of a part resolves to the same
//! name. Intel parts are matched with [`FPGA_ID_MASK_FULL`]; their
//! engineering-sample and reduced-feature revisions are cataloged one by one.

/// Ignore the version / stepping nibble (bits 31..28)
pub const FPGA_ID_MASK_NOVER: u32 = 0x0FFF_FFFF;

/// Exact match on all 32 bits
pub const FPGA_ID_MASK_FULL: u32 = 0xFFFF_FFFF;

// Xilinx
// Spartan 7
pub const FPGA_ID_XC7S6: u32 = 0x0362_2093;
pub const FPGA_ID_XC7S15: u32 = 0x0362_0093;
pub const FPGA_ID_XC7S25: u32 = 0x037C_4093;
pub const FPGA_ID_XC7S50: u32 = 0x0362_F093;
pub const FPGA_ID_XC7S75: u32 = 0x037C_8093;
pub const FPGA_ID_XC7S100: u32 = 0x037C_7093;
// Artix 7
pub const FPGA_ID_XC7A15T: u32 = 0x0362_E093;
pub const FPGA_ID_XC7A35T: u32 = 0x0362_D093;
pub const FPGA_ID_XC7A50T: u32 = 0x0362_C093;
pub const FPGA_ID_XC7A75T: u32 = 0x0363_2093;
pub const FPGA_ID_XC7A100T: u32 = 0x0363_1093;
pub const FPGA_ID_XC7A200T: u32 = 0x0363_6093;
// Kintex 7
pub const FPGA_ID_XC7K70T: u32 = 0x0364_7093;
pub const FPGA_ID_XC7K160T: u32 = 0x0364_C093;
pub const FPGA_ID_XC7K325T: u32 = 0x0365_1093;
pub const FPGA_ID_XC7K355T: u32 = 0x0374_7093;
pub const FPGA_ID_XC7K410T: u32 = 0x0365_6093;
pub const FPGA_ID_XC7K420T: u32 = 0x0375_2093;
pub const FPGA_ID_XC7K480T: u32 = 0x0375_1093;
// Virtex 7
pub const FPGA_ID_XC7V585T: u32 = 0x0367_1093;
pub const FPGA_ID_XC7V2000T: u32 = 0x036B_3093;
pub const FPGA_ID_XC7VX330T: u32 = 0x0366_7093;
pub const FPGA_ID_XC7VX415T: u32 = 0x0368_2093;
pub const FPGA_ID_XC7VX485T: u32 = 0x0368_7093;
pub const FPGA_ID_XC7VX550T: u32 = 0x0369_2093;
pub const FPGA_ID_XC7VX690T: u32 = 0x0369_1093;
pub const FPGA_ID_XC7VX980T: u32 = 0x0369_6093;
pub const FPGA_ID_XC7VX1140T: u32 = 0x036D_5093;
pub const FPGA_ID_XC7VH580T: u32 = 0x036D_9093;
pub const FPGA_ID_XC7VH870T: u32 = 0x036D_B093;
// Zynq 7000
pub const FPGA_ID_XC7Z007: u32 = 0x0372_3093;
pub const FPGA_ID_XC7Z010: u32 = 0x0372_2093;
pub const FPGA_ID_XC7Z012: u32 = 0x0373_C093;
pub const FPGA_ID_XC7Z014: u32 = 0x0372_8093;
pub const FPGA_ID_XC7Z015: u32 = 0x0373_B093;
pub const FPGA_ID_XC7Z020: u32 = 0x0372_7093;
pub const FPGA_ID_XC7Z030: u32 = 0x0372_C093;
pub const FPGA_ID_XC7Z035: u32 = 0x0373_2093;
pub const FPGA_ID_XC7Z045: u32 = 0x0373_1093;
pub const FPGA_ID_XC7Z100: u32 = 0x0373_6093;
// Kintex UltraScale
pub const FPGA_ID_XCKU025: u32 = 0x0382_4093;
pub const FPGA_ID_XCKU035: u32 = 0x0382_3093;
pub const FPGA_ID_XCKU040: u32 = 0x0382_2093;
pub const FPGA_ID_XCKU060: u32 = 0x0391_9093;
pub const FPGA_ID_XCKU085: u32 = 0x0380_F093;
pub const FPGA_ID_XCKU095: u32 = 0x0384_4093;
pub const FPGA_ID_XCKU115: u32 = 0x0390_D093;
// Virtex UltraScale
pub const FPGA_ID_XCVU065: u32 = 0x0393_9093;
pub const FPGA_ID_XCVU080: u32 = 0x0384_3093;
pub const FPGA_ID_XCVU095: u32 = 0x0384_2093;
pub const FPGA_ID_XCVU125: u32 = 0x0392_D093;
pub const FPGA_ID_XCVU160: u32 = 0x0393_3093;
pub const FPGA_ID_XCVU190: u32 = 0x0393_1093;
pub const FPGA_ID_XCVU440: u32 = 0x0396_D093;
// Artix UltraScale+
pub const FPGA_ID_XCAU10P: u32 = 0x04AC_4093;
pub const FPGA_ID_XCAU15P: u32 = 0x04AC_2093;
pub const FPGA_ID_XCAU20P: u32 = 0x04A6_5093;
pub const FPGA_ID_XCAU25P: u32 = 0x04A6_4093;
// Kintex UltraScale+
pub const FPGA_ID_XCKU3P: u32 = 0x04A6_3093;
pub const FPGA_ID_XCKU5P: u32 = 0x04A6_2093;
pub const FPGA_ID_XCKU9P: u32 = 0x0484_A093;
pub const FPGA_ID_XCKU11P: u32 = 0x04A4_E093;
pub const FPGA_ID_XCKU13P: u32 = 0x04A5_2093;
pub const FPGA_ID_XCKU15P: u32 = 0x04A5_6093;
// Virtex UltraScale+
pub const FPGA_ID_XCVU3P: u32 = 0x04B3_9093;
pub const FPGA_ID_XCVU5P: u32 = 0x04B2_B093;
pub const FPGA_ID_XCVU7P: u32 = 0x04B2_9093;
pub const FPGA_ID_XCVU9P: u32 = 0x04B3_1093;
pub const FPGA_ID_XCVU11P: u32 = 0x04B4_9093;
pub const FPGA_ID_XCVU13P: u32 = 0x04B5_1093;
pub const FPGA_ID_XCVU19P: u32 = 0x04BA_1093;
pub const FPGA_ID_XCVU23P: u32 = 0x04AC_F093;
pub const FPGA_ID_XCVU27P: u32 = 0x04B4_3093;
pub const FPGA_ID_XCVU29P: u32 = 0x04B4_1093;
pub const FPGA_ID_XCVU31P: u32 = 0x04B6_B093;
pub const FPGA_ID_XCVU33P: u32 = 0x04B6_9093;
pub const FPGA_ID_XCVU35P: u32 = 0x04B7_1093;
pub const FPGA_ID_XCVU37P: u32 = 0x04B7_9093;
pub const FPGA_ID_XCVU45P: u32 = 0x04B7_3093;
pub const FPGA_ID_XCVU47P: u32 = 0x04B7_B093;
pub const FPGA_ID_XCVU57P: u32 = 0x04B6_1093;
// Zynq UltraScale+
pub const FPGA_ID_XCZU1: u32 = 0x0468_8093;
pub const FPGA_ID_XCZU2: u32 = 0x0471_1093;
pub const FPGA_ID_XCZU3: u32 = 0x0471_0093;
pub const FPGA_ID_XCZU4: u32 = 0x0472_1093;
pub const FPGA_ID_XCZU5: u32 = 0x0472_0093;
pub const FPGA_ID_XCZU6: u32 = 0x0473_9093;
pub const FPGA_ID_XCZU7: u32 = 0x0473_0093;
pub const FPGA_ID_XCZU9: u32 = 0x0473_8093;
pub const FPGA_ID_XCZU11: u32 = 0x0474_0093;
pub const FPGA_ID_XCZU15: u32 = 0x0475_0093;
pub const FPGA_ID_XCZU17: u32 = 0x0475_9093;
pub const FPGA_ID_XCZU19: u32 = 0x0475_8093;
pub const FPGA_ID_XCZU21: u32 = 0x047E_1093;
pub const FPGA_ID_XCZU25: u32 = 0x047E_5093;
pub const FPGA_ID_XCZU27: u32 = 0x047E_4093;
pub const FPGA_ID_XCZU28: u32 = 0x047E_0093;
pub const FPGA_ID_XCZU29: u32 = 0x047E_2093;
pub const FPGA_ID_XCZU39: u32 = 0x047E_6093;
pub const FPGA_ID_XCZU43: u32 = 0x047F_D093;
pub const FPGA_ID_XCZU46: u32 = 0x047F_8093;
pub const FPGA_ID_XCZU47: u32 = 0x047F_F093;
pub const FPGA_ID_XCZU48: u32 = 0x047F_B093;
pub const FPGA_ID_XCZU49: u32 = 0x047F_E093;
pub const FPGA_ID_XCZU65: u32 = 0x046D_5093;
pub const FPGA_ID_XCZU67: u32 = 0x046D_4093;
// Kria SoM (Zynq UltraScale+)
pub const FPGA_ID_XCK26: u32 = 0x0472_4093;
// Alveo (Virtex UltraScale+)
pub const FPGA_ID_XCU50: u32 = 0x04B7_7093;
pub const FPGA_ID_XCU200: u32 = 0x04B3_7093;
pub const FPGA_ID_XCU250: u32 = 0x04B5_7093;
pub const FPGA_ID_XCU280: u32 = 0x04B7_D093;
// Versal AI Edge
pub const FPGA_ID_XCVE1752: u32 = 0x04C9_B093;
pub const FPGA_ID_XCVE2002: u32 = 0x04C9_4093;
pub const FPGA_ID_XCVE2102: u32 = 0x04C9_5093;
pub const FPGA_ID_XCVE2202: u32 = 0x04C8_A093;
pub const FPGA_ID_XCVE2302: u32 = 0x04C8_B093;
pub const FPGA_ID_XCVE2602: u32 = 0x04CC_1093;
pub const FPGA_ID_XCVE2802: u32 = 0x04CC_8093;
// Versal AI Core
pub const FPGA_ID_XCVC1352: u32 = 0x04CD_2093;
pub const FPGA_ID_XCVC1502: u32 = 0x04CD_0093;
pub const FPGA_ID_XCVC1702: u32 = 0x04CD_3093;
pub const FPGA_ID_XCVC1802: u32 = 0x04CA_A093;
pub const FPGA_ID_XCVC1902: u32 = 0x04CA_8093;
pub const FPGA_ID_XCVC2602: u32 = 0x04CC_9093;
pub const FPGA_ID_XCVC2802: u32 = 0x04CC_0093;
// Versal Prime
pub const FPGA_ID_XCVM1102: u32 = 0x04CE_3093;
pub const FPGA_ID_XCVM1302: u32 = 0x04CD_B093;
pub const FPGA_ID_XCVM1402: u32 = 0x04CD_A093;
pub const FPGA_ID_XCVM1502: u32 = 0x04CB_1093;
pub const FPGA_ID_XCVM1802: u32 = 0x04CA_9093;
pub const FPGA_ID_XCVM2202: u32 = 0x04CE_8093;
pub const FPGA_ID_XCVM2302: u32 = 0x04CE_9093;
pub const FPGA_ID_XCVM2502: u32 = 0x04CE_2093;
pub const FPGA_ID_XCVM2902: u32 = 0x04CE_B093;
// Versal Premium
pub const FPGA_ID_XCVP1002: u32 = 0x04D1_C093;
pub const FPGA_ID_XCVP1052: u32 = 0x04D0_8093;
pub const FPGA_ID_XCVP1102: u32 = 0x04D1_4093;
pub const FPGA_ID_XCVP1202: u32 = 0x04D1_0093;
pub const FPGA_ID_XCVP1402: u32 = 0x04D1_8093;
pub const FPGA_ID_XCVP1502: u32 = 0x04D0_0093;
pub const FPGA_ID_XCVP1552: u32 = 0x04D0_1093;
pub const FPGA_ID_XCVP1702: u32 = 0x04D0_4093;
pub const FPGA_ID_XCVP1802: u32 = 0x04D0_5093;
pub const FPGA_ID_XCVP2502: u32 = 0x04D2_0093;
pub const FPGA_ID_XCVP2802: u32 = 0x04D2_4093;

// Intel
// Stratix 10
pub const FPGA_ID_1SG10MH_U1: u32 = 0x0601_80DD;
pub const FPGA_ID_1SG10MH_U2: u32 = 0x0601_90DD;
pub const FPGA_ID_1SG040H: u32 = 0x0604_10DD;
pub const FPGA_ID_1SG040H_NL: u32 = 0x0604_90DD;
pub const FPGA_ID_1SG065H: u32 = 0x0606_10DD;
pub const FPGA_ID_1SG065H_NL: u32 = 0x0606_90DD;
pub const FPGA_ID_1SG085H: u32 = 0x0608_10DD;
pub const FPGA_ID_1SG110H: u32 = 0x0611_10DD;
pub const FPGA_ID_1SG110H_NL: u32 = 0x0611_90DD;
pub const FPGA_ID_1SG165H: u32 = 0x0616_10DD;
pub const FPGA_ID_1SG166H: u32 = 0x0617_10DD;
pub const FPGA_ID_1SG166H_NL: u32 = 0x0617_90DD;
pub const FPGA_ID_1SG210H: u32 = 0x0621_10DD;
pub const FPGA_ID_1SG210H_ES1: u32 = 0x1621_10DD;
pub const FPGA_ID_1SG211H: u32 = 0x0622_10DD;
pub const FPGA_ID_1SG250L: u32 = 0x0625_20DD;
pub const FPGA_ID_1SG250H: u32 = 0x0625_10DD;
pub const FPGA_ID_1SG280L: u32 = 0x0628_20DD;
pub const FPGA_ID_1SG280L_NL: u32 = 0x0628_A0DD;
pub const FPGA_ID_1SG280L_ES1: u32 = 0x1628_20DD;
pub const FPGA_ID_1SG280L_ES2: u32 = 0x2628_20DD;
pub const FPGA_ID_1SG280L_ES3: u32 = 0x3628_20DD;
pub const FPGA_ID_1SG280H: u32 = 0x0628_10DD;
pub const FPGA_ID_1SG280H_NL: u32 = 0x0628_90DD;
pub const FPGA_ID_1SG280H_ES1: u32 = 0x1628_10DD;
pub const FPGA_ID_1SG280H_ES2: u32 = 0x2628_10DD;
pub const FPGA_ID_1SG280H_ES3: u32 = 0x3628_10DD;
pub const FPGA_ID_1SX040H: u32 = 0x0704_10DD;
pub const FPGA_ID_1SX065H: u32 = 0x0706_10DD;
pub const FPGA_ID_1SX085H: u32 = 0x0708_10DD;
pub const FPGA_ID_1SX110H: u32 = 0x0711_10DD;
pub const FPGA_ID_1SX165H: u32 = 0x0716_10DD;
pub const FPGA_ID_1SX210H: u32 = 0x0721_10DD;
pub const FPGA_ID_1SX250L: u32 = 0x0725_20DD;
pub const FPGA_ID_1SX250H: u32 = 0x0725_10DD;
pub const FPGA_ID_1SX280L: u32 = 0x0728_20DD;
pub const FPGA_ID_1SX280L_ES1: u32 = 0x1728_20DD;
pub const FPGA_ID_1SX280L_ES2: u32 = 0x2728_20DD;
pub const FPGA_ID_1SX280H: u32 = 0x0728_10DD;
pub const FPGA_ID_1SX280H_ES1: u32 = 0x1728_10DD;
pub const FPGA_ID_1SX280H_ES2: u32 = 0x2728_10DD;
pub const FPGA_ID_1ST040E: u32 = 0x0804_30DD;
pub const FPGA_ID_1ST040E_NL: u32 = 0x0804_B0DD;
pub const FPGA_ID_1ST085E: u32 = 0x0808_30DD;
pub const FPGA_ID_1ST110E: u32 = 0x0811_30DD;
pub const FPGA_ID_1ST110E_NL: u32 = 0x0811_B0DD;
pub const FPGA_ID_1ST165E: u32 = 0x0816_30DD;
pub const FPGA_ID_1ST210E: u32 = 0x0821_30DD;
pub const FPGA_ID_1ST210E_ES1: u32 = 0x1821_30DD;
pub const FPGA_ID_1ST250E: u32 = 0x0825_30DD;
pub const FPGA_ID_1ST280E: u32 = 0x0828_30DD;
pub const FPGA_ID_1ST280E_ES1: u32 = 0x1828_30DD;
pub const FPGA_ID_1SM16BE: u32 = 0x091B_30DD;
pub const FPGA_ID_1SM16BE_ES1: u32 = 0x191B_30DD;
pub const FPGA_ID_1SM16BH: u32 = 0x091B_10DD;
pub const FPGA_ID_1SM16BH_ES1: u32 = 0x191B_10DD;
pub const FPGA_ID_1SM16CH: u32 = 0x091C_10DD;
pub const FPGA_ID_1SM16CH_ES1: u32 = 0x191C_10DD;
pub const FPGA_ID_1SM21BE: u32 = 0x092B_30DD;
pub const FPGA_ID_1SM21BE_ES1: u32 = 0x192B_30DD;
pub const FPGA_ID_1SM21BH: u32 = 0x092B_10DD;
pub const FPGA_ID_1SM21BH_ES1: u32 = 0x192B_10DD;
pub const FPGA_ID_1SM21CH: u32 = 0x092C_10DD;
pub const FPGA_ID_1SM21CH_ES1: u32 = 0x192C_10DD;
pub const FPGA_ID_1SD110P: u32 = 0x0A11_40DD;
pub const FPGA_ID_1SD110P_NL: u32 = 0x0A11_C0DD;
pub const FPGA_ID_1SD21BP: u32 = 0x0A2B_40DD;
pub const FPGA_ID_1SD280P: u32 = 0x0A28_40DD;
// Agilex
pub const FPGA_ID_AGFA006R16A: u32 = 0x4106_00DD;
pub const FPGA_ID_AGFA008R16A: u32 = 0x4108_00DD;
pub const FPGA_ID_AGFA012R24A: u32 = 0x410C_10DD;
pub const FPGA_ID_AGFA012R24B: u32 = 0x410C_20DD;
pub const FPGA_ID_AGFA014R24AR0: u32 = 0x010E_10DD;
pub const FPGA_ID_AGFA014R24A: u32 = 0x410E_10DD;
pub const FPGA_ID_AGFA014R24B: u32 = 0x410E_20DD;
pub const FPGA_ID_AGFA019R25A: u32 = 0x4113_40DD;
pub const FPGA_ID_AGFA022R24C: u32 = 0x4116_30DD;
pub const FPGA_ID_AGFA022R25A: u32 = 0x4116_40DD;
pub const FPGA_ID_AGFA022R31C: u32 = 0x4116_50DD;
pub const FPGA_ID_AGFA023R25AR0: u32 = 0x0117_40DD;
pub const FPGA_ID_AGFA023R25A: u32 = 0x4117_40DD;
pub const FPGA_ID_AGFA027R24CR0: u32 = 0x011B_30DD;
pub const FPGA_ID_AGFA027R24CR2: u32 = 0x211B_30DD;
pub const FPGA_ID_AGFA027R24C: u32 = 0x411B_30DD;
pub const FPGA_ID_AGFA027R25AR0: u32 = 0x011B_40DD;
pub const FPGA_ID_AGFA027R25A: u32 = 0x411B_40DD;
pub const FPGA_ID_AGFA027R31C: u32 = 0x411B_50DD;
pub const FPGA_ID_AGFB006R16A: u32 = 0x4206_00DD;
pub const FPGA_ID_AGFB008R16A: u32 = 0x4208_00DD;
pub const FPGA_ID_AGFB012R24A: u32 = 0x420C_10DD;
pub const FPGA_ID_AGFB012R24B: u32 = 0x420C_20DD;
pub const FPGA_ID_AGFB014R24AR0: u32 = 0x020E_10DD;
pub const FPGA_ID_AGFB014R24A: u32 = 0x420E_10DD;
pub const FPGA_ID_AGFB014R24B: u32 = 0x420E_20DD;
pub const FPGA_ID_AGFB019R25A: u32 = 0x4213_40DD;
pub const FPGA_ID_AGFB022R24C: u32 = 0x4216_30DD;
pub const FPGA_ID_AGFB022R25A: u32 = 0x4216_40DD;
pub const FPGA_ID_AGFB022R31C: u32 = 0x4216_50DD;
pub const FPGA_ID_AGFB023R25AR0: u32 = 0x0217_40DD;
pub const FPGA_ID_AGFB023R25A: u32 = 0x4217_40DD;
pub const FPGA_ID_AGFB027R24CR0: u32 = 0x021B_30DD;
pub const FPGA_ID_AGFB027R24CR2: u32 = 0x221B_30DD;
pub const FPGA_ID_AGFB027R24C: u32 = 0x421B_30DD;
pub const FPGA_ID_AGFB027R25AR0: u32 = 0x021B_40DD;
pub const FPGA_ID_AGFB027R25A: u32 = 0x421B_40DD;
pub const FPGA_ID_AGFB027R31C: u32 = 0x421B_50DD;
pub const FPGA_ID_AGFC019R25A: u32 = 0x4313_40DD;
pub const FPGA_ID_AGFC023R25AR0: u32 = 0x0317_40DD;
pub const FPGA_ID_AGFC023R25A: u32 = 0x4317_40DD;
pub const FPGA_ID_AGFD019R25A: u32 = 0x4413_40DD;
pub const FPGA_ID_AGFD023R25AR0: u32 = 0x0417_40DD;
pub const FPGA_ID_AGFD023R25A: u32 = 0x4417_40DD;
pub const FPGA_ID_AGIB022R29A: u32 = 0x4516_60DD;
pub const FPGA_ID_AGIB022R31B: u32 = 0x4516_70DD;
pub const FPGA_ID_AGIB027R29AR0: u32 = 0x051B_60DD;
pub const FPGA_ID_AGIB027R29AR1: u32 = 0x151B_60DD;
pub const FPGA_ID_AGIB027R29AR3: u32 = 0x351B_60DD;
pub const FPGA_ID_AGIB027R29A: u32 = 0x451B_60DD;
pub const FPGA_ID_AGIB027R31BR0: u32 = 0x051B_70DD;
pub const FPGA_ID_AGIB027R31B: u32 = 0x451B_70DD;
