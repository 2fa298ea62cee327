//! Lecturer (giảng viên) screenshots.

use super::RoleTables;
use crate::ordering::{hide, show};

pub(super) static TABLES: RoleTables = RoleTables {
    renames: RENAMES,
    descriptions: DESCRIPTIONS,
    english: ENGLISH,
    ordering: &[
        show("Đăng nhập giảng viên.png"),
        show("Quản lý khóa học.png"),
        show("Quản lý khóa học (hộp thoại).png"),
        show("Quản lý nội dung khóa học.png"),
        hide("Quản lý nội dung khóa học (thêm phần học).png"),
        show("Quản lý nội dung khóa học (thêm nội dung).png"),
        hide("Quản lý nội dung khóa học (tài liệu).png"),
        show("Quản lý nội dung khóa học (thêm tài liệu).png"),
        hide("Quản lý nội dung khóa học (bài tập và trắc nghiệm).png"),
        show("Quản lý nội dung khóa học (hộp thoại bài tập).png"),
        show("Quản lý nội dung khóa học (hộp thoại trắc nghiệm).png"),
        hide("Quản lý nội dung khóa học (xóa nội dung).png"),
        show("Quản lý học sinh sinh viên.png"),
        show("Quản lý học sinh sinh viên (cảnh báo học vụ).png"),
        show("Quản lý học sinh sinh viên (bảng điểm).png"),
        show("Quản lý lớp học thuật.png"),
        show("Quản lý lớp học thuật (hộp thoại).png"),
        show("Quản lý lớp học thuật (thêm sinh viên).png"),
        hide("Quản lý lớp học thuật (xem sinh viên).png"),
        show("Quản lý lớp học thuật (thêm khóa học).png"),
        show("Quản lý bài tập.png"),
        show("Quản lý bài tập (thêm bài cho lớp học thuật).png"),
        hide("Quản lý bài tập (xem file nộp).png"),
        show("Quản lý bài tập (chấm điểm).png"),
        show("Quản lý bài trắc nghiệm.png"),
        show("Quản lý bài trắc nghiệm (thêm bài cho lớp học thuật).png"),
        show("Quản lý bài trắc nghiệm (xem bài làm).png"),
        hide("Quản lý bài trắc nghiệm (xem theo lớp).png"),
        show("Hộp thoại chat.png"),
        show("Quản lý lịch dạy.png"),
        show("Quản lý lịch dạy (hộp thoại).png"),
        show("Quản lý điểm danh.png"),
        show("Quản lý diễn đàn.png"),
        show("Quản lý diễn đàn (hộp thoại).png"),
        hide("Quản lý diễn đàn (xem diễn đàn).png"),
        show("Quản lý đánh giá.png"),
        show("Quản lý thống kê.png"),
        show("Quản lý thông báo.png"),
        hide("Quản lý tài khoản.png"),
    ],
};

/// Slug file name -> labelled file name.
const RENAMES: &[(&str, &str)] = &[
    ("quanlytaikhoan.png", "Quản lý tài khoản.png"),
    ("quanlythongbao.png", "Quản lý thông báo.png"),
    ("quanlythongke.png", "Quản lý thống kê.png"),
    ("quanlydiendan(xemdiendan).png", "Quản lý diễn đàn (xem diễn đàn).png"),
    ("quanlydiendandialog.png", "Quản lý diễn đàn (hộp thoại).png"),
    ("quanlydiendan.png", "Quản lý diễn đàn.png"),
    ("quanlydanhgia.png", "Quản lý đánh giá.png"),
    ("quanlydiemdanh.png", "Quản lý điểm danh.png"),
    ("quanlylichdaydialog.png", "Quản lý lịch dạy (hộp thoại).png"),
    ("quanlylichday.png", "Quản lý lịch dạy.png"),
    ("chatbox.png", "Hộp thoại chat.png"),
    ("quanlybaitapdialog(thembaicholophocthuat).png", "Quản lý bài tập (thêm bài cho lớp học thuật).png"),
    ("quanlybaitracnghiemdialog(thembaicholophocthuat).png", "Quản lý bài trắc nghiệm (thêm bài cho lớp học thuật).png"),
    ("quanlybaitracnghiem(xembailam).png", "Quản lý bài trắc nghiệm (xem bài làm).png"),
    ("quanlybaitracnghiem(xemtheolop).png", "Quản lý bài trắc nghiệm (xem theo lớp).png"),
    ("quanlybaitracnghiem.png", "Quản lý bài trắc nghiệm.png"),
    ("quanlybaitap(xemfilenop).png", "Quản lý bài tập (xem file nộp).png"),
    ("quanlybaitap(chamdiem).png", "Quản lý bài tập (chấm điểm).png"),
    ("quanlybaitap.png", "Quản lý bài tập.png"),
    ("quanlylophocthuat(themsinhvien).png", "Quản lý lớp học thuật (thêm sinh viên).png"),
    ("quanlylophocthuat(xemsinhvien).png", "Quản lý lớp học thuật (xem sinh viên).png"),
    ("quanlylophocthuat(themkhoahoc).png", "Quản lý lớp học thuật (thêm khóa học).png"),
    ("quanlylophocthuatdialog.png", "Quản lý lớp học thuật (hộp thoại).png"),
    ("quanlylophocthuat.png", "Quản lý lớp học thuật.png"),
    ("quanlyhocviensinhvien(canhbaohocvu).png", "Quản lý học sinh sinh viên (cảnh báo học vụ).png"),
    ("quanlyhocviensinhvien(bangdiem).png", "Quản lý học sinh sinh viên (bảng điểm).png"),
    ("quanlyhocviensinhvien2.png", "Quản lý học sinh sinh viên 2.png"),
    ("quanlyhocviensinhvien.png", "Quản lý học sinh sinh viên.png"),
    ("quanlynoidungkhoahoc(dialogbaitap).png", "Quản lý nội dung khóa học (hộp thoại bài tập).png"),
    ("quanlynoidungkhoahoc(dialogtracnghiem).png", "Quản lý nội dung khóa học (hộp thoại trắc nghiệm).png"),
    ("quanlynoidungkhoahoc(baitapvatracnghiem).png", "Quản lý nội dung khóa học (bài tập và trắc nghiệm).png"),
    ("quanlynoidungkhoahoc(tailieu).png", "Quản lý nội dung khóa học (tài liệu).png"),
    ("quanlynoidungkhoahoc(themtailieu).png", "Quản lý nội dung khóa học (thêm tài liệu).png"),
    ("quanlynoidungkhoahoc(xoanoidung).png", "Quản lý nội dung khóa học (xóa nội dung).png"),
    ("quanlynoidungkhoahoc(themnoidung).png", "Quản lý nội dung khóa học (thêm nội dung).png"),
    ("quanlynoidungkhoahoc(themphanhoc).png", "Quản lý nội dung khóa học (thêm phần học).png"),
    ("quanlynoidungkhoahoc.png", "Quản lý nội dung khóa học.png"),
    ("quanlykhoahocdialog.png", "Quản lý khóa học (hộp thoại).png"),
    ("quanlykhoahoc.png", "Quản lý khóa học.png"),
    ("dangnhapgiangvien.png", "Đăng nhập giảng viên.png"),
];

const DESCRIPTIONS: &[(&str, &str)] = &[
    (
        "Quản lý thông báo.png",
        "Màn hình cho phép giảng viên tạo mới, chỉnh sửa, gửi và quản lý các thông báo đến học viên trong lớp hoặc toàn bộ hệ thống. Giảng viên có thể phân loại thông báo theo chủ đề, theo dõi trạng thái đã đọc/chưa đọc, đính kèm tài liệu, hình ảnh và nhận phản hồi từ học viên. Chức năng này giúp đảm bảo thông tin quan trọng được truyền tải kịp thời, tăng cường tương tác giữa giảng viên và học viên.",
    ),
    (
        "Quản lý thống kê.png",
        "Màn hình cung cấp các báo cáo, thống kê chi tiết về tiến độ học tập, kết quả kiểm tra, tỷ lệ hoàn thành bài tập, mức độ tương tác của học viên trong từng lớp hoặc từng khóa học. Giảng viên có thể lọc, xuất báo cáo theo thời gian, lớp học, khóa học, so sánh kết quả giữa các lớp và nhận gợi ý cải thiện chất lượng giảng dạy. Chức năng này hỗ trợ giảng viên đánh giá hiệu quả đào tạo và điều chỉnh phương pháp giảng dạy phù hợp.",
    ),
    (
        "Quản lý diễn đàn (hộp thoại).png",
        "Màn hình hộp thoại cho phép giảng viên tạo mới, chỉnh sửa hoặc xóa các chủ đề thảo luận, thiết lập quyền truy cập, đính kèm tài liệu, hình ảnh và gửi thông báo đến học viên khi có chủ đề mới. Chức năng này giúp quản lý diễn đàn hiệu quả, tạo môi trường học tập tương tác, sáng tạo.",
    ),
    (
        "Quản lý diễn đàn.png",
        "Màn hình tổng quan về quản lý diễn đàn, cho phép giảng viên xem danh sách tất cả các diễn đàn, chủ đề, số lượng bài viết, bình luận, mức độ tương tác của học viên và thống kê hoạt động thảo luận. Giảng viên có thể tìm kiếm, lọc, truy cập nhanh vào từng diễn đàn để quản lý nội dung.",
    ),
    (
        "Quản lý đánh giá.png",
        "Màn hình cho phép giảng viên xem, phản hồi và tổng hợp các đánh giá từ học viên về chất lượng giảng dạy, nội dung khóa học, tài liệu, phương pháp truyền đạt. Giảng viên có thể phân tích xu hướng đánh giá, nhận góp ý cải thiện và xây dựng hình ảnh cá nhân chuyên nghiệp.",
    ),
    (
        "Quản lý điểm danh.png",
        "Màn hình cho phép giảng viên điểm danh học viên trong từng buổi học, theo dõi lịch sử điểm danh, xuất báo cáo chuyên cần, gửi cảnh báo cho học viên vắng mặt nhiều lần. Chức năng này giúp nâng cao ý thức học tập, đảm bảo sự tham gia đầy đủ của học viên.",
    ),
    (
        "Quản lý lịch dạy (hộp thoại).png",
        "Màn hình hộp thoại cho phép giảng viên tạo mới, chỉnh sửa, xóa các buổi học, thiết lập lịch dạy, phân công phòng học, gửi thông báo nhắc lịch cho học viên. Giảng viên có thể đồng bộ lịch dạy với các thiết bị cá nhân, đảm bảo không bỏ lỡ buổi học nào.",
    ),
    (
        "Quản lý lịch dạy.png",
        "Màn hình tổng quan về lịch dạy của giảng viên, hiển thị chi tiết các buổi học, lớp học, thời gian, địa điểm, nội dung giảng dạy. Giảng viên có thể xem, lọc, tìm kiếm lịch dạy theo tuần, tháng, xuất lịch ra file và nhận thông báo nhắc lịch.",
    ),
    (
        "Hộp thoại chat.png",
        "Màn hình chat cho phép giảng viên trao đổi trực tiếp với học viên, hỗ trợ giải đáp thắc mắc, gửi tài liệu, hình ảnh, thông báo khẩn cấp và lưu trữ lịch sử trò chuyện. Chức năng này giúp tăng cường sự kết nối, hỗ trợ học viên kịp thời.",
    ),
    (
        "Quản lý bài tập (thêm bài cho lớp học thuật).png",
        "Màn hình cho phép giảng viên tạo mới bài tập cho từng lớp học thuật, thiết lập yêu cầu, thời hạn nộp, đính kèm tài liệu hướng dẫn, phân loại bài tập theo mức độ khó, chủ đề. Giảng viên có thể gửi thông báo giao bài tập đến học viên.",
    ),
    (
        "Quản lý bài trắc nghiệm (thêm bài cho lớp học thuật).png",
        "Màn hình cho phép giảng viên tạo mới bài trắc nghiệm cho lớp học thuật, thiết lập câu hỏi, đáp án, thời gian làm bài, phân loại theo chủ đề, mức độ. Giảng viên có thể xem trước bài trắc nghiệm, gửi thông báo cho học viên.",
    ),
    (
        "Quản lý bài trắc nghiệm (xem bài làm).png",
        "Màn hình cho phép giảng viên xem chi tiết bài làm trắc nghiệm của từng học viên, chấm điểm, nhận xét, phát hiện gian lận, xuất kết quả và gửi phản hồi cá nhân hóa.",
    ),
    (
        "Quản lý bài trắc nghiệm.png",
        "Màn hình tổng quan về quản lý bài trắc nghiệm, cho phép giảng viên tạo mới, chỉnh sửa, xóa, phân loại, xuất kết quả, thống kê điểm số và gửi thông báo cho học viên.",
    ),
    (
        "Quản lý bài tập (chấm điểm).png",
        "Màn hình cho phép giảng viên chấm điểm bài tập, nhập nhận xét chi tiết, gửi phản hồi cho từng học viên, xuất bảng điểm và thống kê kết quả học tập.",
    ),
    (
        "Quản lý bài tập.png",
        "Màn hình này cung cấp đầy đủ các nghiệp vụ liên quan đến quản lý bài tập cho từng lớp học hoặc khóa học. Giảng viên có thể tạo mới bài tập, thiết lập thời hạn nộp, mô tả yêu cầu, đính kèm tài liệu hướng dẫn. Ngoài ra, chức năng còn cho phép xem danh sách bài tập đã giao, chỉnh sửa hoặc xóa bài tập, theo dõi số lượng học viên đã nộp bài, chấm điểm trực tiếp trên hệ thống, nhận xét và trả bài cho học viên. Đối với từng bài tập, giảng viên có thể xem chi tiết từng bài nộp, tải về file đính kèm, và gửi phản hồi cá nhân hóa cho từng học viên. Chức năng này giúp nâng cao hiệu quả quản lý, đánh giá và hỗ trợ học viên trong quá trình học tập.",
    ),
    (
        "Quản lý lớp học thuật (thêm sinh viên).png",
        "Màn hình cho phép giảng viên thêm sinh viên vào lớp học thuật, tìm kiếm, lọc, phân nhóm sinh viên, gửi thông báo mời tham gia lớp.",
    ),
    (
        "Quản lý lớp học thuật (thêm khóa học).png",
        "Màn hình cho phép giảng viên thêm khóa học vào lớp học thuật, thiết lập lịch học, phân công giảng viên phụ trách.",
    ),
    (
        "Quản lý lớp học thuật (hộp thoại).png",
        "Màn hình hộp thoại cho phép giảng viên quản lý thông tin lớp học, chỉnh sửa tên lớp, mô tả, lịch học, danh sách sinh viên.",
    ),
    (
        "Quản lý lớp học thuật.png",
        "Màn hình tổng quan về quản lý lớp học thuật, cho phép giảng viên xem danh sách lớp, lịch học, số lượng sinh viên, tiến độ học tập, gửi thông báo cho lớp.",
    ),
    (
        "Quản lý học sinh sinh viên.png",
        "Màn hình tổng quan cho phép giảng viên quản lý toàn bộ học sinh/sinh viên trong các lớp học phụ trách. Giảng viên có thể xem danh sách học viên, tìm kiếm, lọc theo lớp học, khóa học hoặc trạng thái học tập. Ngoài ra, giảng viên có thể truy cập vào thông tin chi tiết của từng học viên để xem tiến độ học tập, điểm số, lịch sử tham gia các hoạt động học tập và các cảnh báo học vụ nếu có. Chức năng này giúp giảng viên theo dõi và hỗ trợ học viên một cách hiệu quả.",
    ),
    (
        "Quản lý học sinh sinh viên (cảnh báo học vụ).png",
        "Màn hình cho phép giảng viên tạo và quản lý các cảnh báo học vụ cho học viên có kết quả học tập yếu hoặc vắng mặt nhiều. Giảng viên có thể thiết lập các tiêu chí cảnh báo, gửi thông báo đến học viên và phụ huynh, theo dõi quá trình cải thiện và đánh giá hiệu quả của các biện pháp hỗ trợ. Chức năng này giúp phát hiện sớm và can thiệp kịp thời để nâng cao chất lượng học tập.",
    ),
    (
        "Quản lý học sinh sinh viên (bảng điểm).png",
        "Màn hình cho phép giảng viên quản lý và theo dõi bảng điểm của học viên trong các lớp học. Giảng viên có thể nhập điểm cho từng bài tập, bài kiểm tra, trắc nghiệm, tính điểm trung bình, xuất báo cáo điểm số và gửi thông báo kết quả học tập cho học viên. Chức năng này giúp đánh giá chính xác và minh bạch kết quả học tập của học viên.",
    ),
    (
        "Quản lý học sinh sinh viên 2.png",
        "Màn hình bổ sung cho quản lý học viên/sinh viên, hỗ trợ các nghiệp vụ nâng cao như phân tích học lực, đề xuất hỗ trợ cá nhân.",
    ),
    (
        "Quản lý nội dung khóa học (hộp thoại bài tập).png",
        "Màn hình hộp thoại cho phép giảng viên quản lý, thêm mới, chỉnh sửa, xóa bài tập trong nội dung khóa học, đính kèm tài liệu hướng dẫn, phân loại bài tập.",
    ),
    (
        "Quản lý nội dung khóa học (hộp thoại trắc nghiệm).png",
        "Màn hình hộp thoại cho phép giảng viên quản lý, thêm mới, chỉnh sửa, xóa bài trắc nghiệm trong nội dung khóa học, thiết lập câu hỏi, đáp án.",
    ),
    (
        "Quản lý nội dung khóa học (thêm tài liệu).png",
        "Màn hình cho phép giảng viên thêm mới tài liệu học tập vào khóa học, đính kèm file, mô tả chi tiết, phân loại tài liệu.",
    ),
    (
        "Quản lý nội dung khóa học (thêm nội dung).png",
        "Màn hình cho phép giảng viên thêm mới nội dung bài học, bài tập, trắc nghiệm vào khóa học, thiết lập thứ tự, phân loại nội dung.",
    ),
    (
        "Quản lý nội dung khóa học.png",
        "Màn hình tổng quan về quản lý nội dung khóa học, cho phép giảng viên xem, tìm kiếm, chỉnh sửa, phân loại, xuất báo cáo nội dung các khóa học.",
    ),
    (
        "Quản lý khóa học (hộp thoại).png",
        "Màn hình hộp thoại cho phép giảng viên quản lý thông tin chi tiết của khóa học, chỉnh sửa tên, mô tả, lịch học, giảng viên phụ trách.",
    ),
    (
        "Quản lý khóa học.png",
        "Đây là màn hình trung tâm cho phép quản trị viên hoặc giảng viên quản lý toàn bộ các khóa học trên hệ thống. Người dùng có thể xem danh sách các khóa học hiện có, tìm kiếm, lọc theo chuyên ngành, trạng thái hoặc giảng viên phụ trách. Ngoài ra, chức năng này còn hỗ trợ thêm mới khóa học, chỉnh sửa thông tin chi tiết (tên, mô tả, học phí, thời lượng, giảng viên phụ trách), xóa hoặc tạm ngưng khóa học. Người dùng cũng có thể truy cập vào từng khóa học để quản lý nội dung bài học, tài liệu, bài tập, trắc nghiệm, cũng như theo dõi số lượng học viên đăng ký và tiến độ học tập của từng lớp. Chức năng này giúp đảm bảo việc tổ chức, vận hành và cập nhật các khóa học được thực hiện hiệu quả, đáp ứng nhu cầu đào tạo đa dạng.",
    ),
    (
        "Đăng nhập giảng viên.png",
        "Màn hình đăng nhập dành riêng cho giảng viên, cho phép truy cập các chức năng quản lý lớp học, khóa học, bài tập, trắc nghiệm và trao đổi với học viên. Đảm bảo an toàn, bảo mật và phân quyền rõ ràng cho giảng viên.",
    ),
];

/// Labelled stem -> README caption.
const ENGLISH: &[(&str, &str)] = &[
    ("Hộp thoại chat", "Chat Dialog"),
    ("Quản lý bài trắc nghiệm", "Quiz Management"),
    ("Quản lý bài trắc nghiệm (thêm bài cho lớp học thuật)", "Quiz Management (Add Quiz for Academic Class)"),
    ("Quản lý bài trắc nghiệm (xem theo lớp)", "Quiz Management (View by Class)"),
    ("Quản lý bài trắc nghiệm (xem bài làm)", "Quiz Management (View Quiz Attempts)"),
    ("Quản lý nội dung khóa học", "Course Content Management"),
    ("Quản lý nội dung khóa học (tài liệu)", "Course Content Management (Documents)"),
    ("Quản lý nội dung khóa học (bài tập và trắc nghiệm)", "Course Content Management (Assignments and Quizzes)"),
    ("Quản lý nội dung khóa học (hộp thoại trắc nghiệm)", "Course Content Management (Quiz Dialog)"),
    ("Quản lý nội dung khóa học (hộp thoại bài tập)", "Course Content Management (Assignment Dialog)"),
    ("Quản lý nội dung khóa học (thêm nội dung)", "Course Content Management (Add Content)"),
    ("Quản lý nội dung khóa học (thêm phần học)", "Course Content Management (Add Learning Section)"),
    ("Quản lý nội dung khóa học (thêm tài liệu)", "Course Content Management (Add Document)"),
    ("Quản lý nội dung khóa học (xóa nội dung)", "Course Content Management (Delete Content)"),
    ("Quản lý thống kê", "Statistics Management"),
    ("Quản lý tài khoản", "Account Management"),
    ("Quản lý diễn đàn", "Forum Management"),
    ("Quản lý diễn đàn (xem diễn đàn)", "Forum Management (View Forum)"),
    ("Quản lý diễn đàn (hộp thoại)", "Forum Management (Dialog)"),
    ("Quản lý điểm danh", "Attendance Management"),
    ("Quản lý bài tập", "Assignment Management"),
    ("Quản lý bài tập (chấm điểm)", "Assignment Management (Grading)"),
    ("Quản lý bài tập (thêm bài cho lớp học thuật)", "Assignment Management (Add Assignment for Academic Class)"),
    ("Quản lý bài tập (xem file nộp)", "Assignment Management (View Submitted Files)"),
    ("Đăng nhập giảng viên", "Lecturer Login"),
    ("Quản lý thông báo", "Notification Management"),
    ("Quản lý lớp học thuật", "Academic Class Management"),
    ("Quản lý lớp học thuật (hộp thoại)", "Academic Class Management (Dialog)"),
    ("Quản lý lớp học thuật (xem sinh viên)", "Academic Class Management (View Students)"),
    ("Quản lý lớp học thuật (thêm sinh viên)", "Academic Class Management (Add Student)"),
    ("Quản lý lớp học thuật (thêm khóa học)", "Academic Class Management (Add Course)"),
    ("Quản lý lịch dạy", "Teaching Schedule Management"),
    ("Quản lý lịch dạy (hộp thoại)", "Teaching Schedule Management (Dialog)"),
    ("Quản lý khóa học", "Course Management"),
    ("Quản lý khóa học (hộp thoại)", "Course Management (Dialog)"),
    ("Quản lý học sinh sinh viên", "Student Management"),
    ("Quản lý học sinh sinh viên (cảnh báo học vụ)", "Student Management (Academic Warning)"),
    ("Quản lý học sinh sinh viên (bảng điểm)", "Student Management (Grade Table)"),
    ("Quản lý đánh giá", "Evaluation Management"),
];
